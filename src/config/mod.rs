mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides};
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig};
