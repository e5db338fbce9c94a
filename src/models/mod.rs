pub mod config;

pub use config::{AppConfig, CliOverrides, CONFIG_ENV_VAR, DEFAULT_CATEGORY};
