// Library interface for trackrs modules
// This allows integration tests to access the core functionality

pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod running;
pub mod swimming;
pub mod tracker;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use models::*;
pub use config::{default_packages, AppConfig, PackageEntry};
pub use dispatch::read_package;
pub use error::{ErrorSeverity, Result, TrackerError};
pub use export::OutputFormat;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use running::Running;
pub use swimming::Swimming;
pub use tracker::{process_packages, summarize};
pub use training::{Training, TrainingReadings};
pub use walking::SportsWalking;
