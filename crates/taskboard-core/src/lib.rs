pub mod config;
pub mod error;
pub mod ids;
pub mod logging;
pub mod result;

pub use config::{AppConfig, CredentialConfig, DEFAULT_ACTIVITY_DISPLAY_LIMIT};
pub use error::TaskboardError;
pub use ids::{generate_id, iso_millis, timestamp, SequentialStamper, Stamper, SystemStamper};
pub use logging::{LogEntry, Loggable};
pub use result::TaskboardResult;
