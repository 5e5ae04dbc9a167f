pub mod config;
pub mod errors;

pub use config::{
    AppConfig, InputConfig, LoggingConfig, OutputConfig, SamplingConfig, TranslationConfig,
    DEFAULT_CONFIG_PATH,
};
pub use errors::{LabelerError, Result};
