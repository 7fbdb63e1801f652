//! Infrastructure adapters for the outbound ports.

pub mod autosave;
pub mod clock;
pub mod config;
pub mod console;
pub mod http_client;
pub mod storage;
pub mod wizard_input;

pub use autosave::spawn_autosave;
pub use clock::SystemClock;
pub use config::PlayerConfig;
pub use console::ConsoleRenderSink;
pub use http_client::HttpApprovalClient;
pub use storage::FileStorage;
pub use wizard_input::{Reply, WizardCommand};
