//! Clock abstraction port
//!
//! Draft timestamps and expiry checks read time through this port so tests
//! can pin "now".

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
