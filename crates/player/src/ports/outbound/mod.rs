//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod approval_api_port;
pub mod clock_port;
pub mod render_port;
pub mod storage_port;

pub use approval_api_port::{ApiError, ApprovalApiPort};
pub use clock_port::ClockPort;
pub use render_port::{Notification, NotificationLevel, PoolSummary, RenderSink};
pub use storage_port::{StorageError, StoragePort};

#[cfg(test)]
pub use approval_api_port::MockApprovalApiPort;
#[cfg(test)]
pub use clock_port::MockClockPort;
#[cfg(test)]
pub use render_port::MockRenderSink;
#[cfg(test)]
pub use storage_port::MockStoragePort;
