//! Configuration: defaults, validation, and the runtime config built from the CLI.

pub mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::GeneratorConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid --{field} {value:?}: {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Device(#[from] device_id::DeviceIdError),
}
