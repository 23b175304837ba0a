//! Label rendering, sheet composition, and font resolution.

pub mod font;
pub mod layout;
pub mod renderer;
pub mod sheet;

use std::path::PathBuf;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Device(#[from] device_id::DeviceIdError),

    #[error(transparent)]
    Image(#[from] image_engine::ImageEngineError),

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to list {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read label {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}
