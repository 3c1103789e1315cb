pub mod settings;

// Re-export commonly used types
pub use settings::{
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
    PlacerSettings,
};

// Error types
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("config io error: {reason}")]
    Io { reason: String },

    #[error("config parse failed: {reason}")]
    Parse { reason: String },

    #[error("config serialize failed: {reason}")]
    Serialize { reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io {
            reason: err.to_string(),
        }
    }
}
