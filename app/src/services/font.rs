//! Label font resolution.
//!
//! Candidates are tried in order: the user's `--font`, fonts in the user's
//! font directory, then well-known system paths. The built-in bitmap font
//! is the final fallback and never fails.

use std::path::{Path, PathBuf};

use image_engine::LabelFont;

const MAX_FONT_SIZE: u64 = 50 * 1024 * 1024; // 50MB
const USER_FONT_NAMES: &[&str] = &["Arial.ttf", "arial.ttf", "DejaVuSans.ttf"];

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Invalid font format (only TTF/OTF supported): {0}")]
    InvalidFormat(#[from] image_engine::ImageEngineError),
    #[error("Font file too large (max 50MB)")]
    FileTooLarge,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the resolved font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Custom(PathBuf),
    System(PathBuf),
    Builtin,
}

impl std::fmt::Display for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom(path) => write!(f, "custom font {}", path.display()),
            Self::System(path) => write!(f, "system font {}", path.display()),
            Self::Builtin => f.write_str("built-in bitmap font"),
        }
    }
}

#[derive(Debug)]
pub struct ResolvedFont {
    pub font: LabelFont,
    pub source: FontSource,
}

/// Ordered list of font files to try.
#[derive(Debug, Clone)]
pub struct FontResolver {
    custom: Option<PathBuf>,
    system: Vec<PathBuf>,
}

impl FontResolver {
    /// Resolver for the current platform, preferring `custom` when given.
    pub fn new(custom: Option<PathBuf>) -> Self {
        let mut system = Vec::new();
        if let Some(dir) = dirs::font_dir() {
            system.extend(USER_FONT_NAMES.iter().map(|name| dir.join(name)));
        }
        system.extend(system_font_candidates().iter().map(PathBuf::from));
        Self { custom, system }
    }

    /// Resolver that goes straight to the built-in font.
    pub fn builtin_only() -> Self {
        Self {
            custom: None,
            system: Vec::new(),
        }
    }

    /// Load the first usable candidate, or fall back to the built-in font.
    pub fn resolve(&self) -> ResolvedFont {
        if let Some(path) = &self.custom {
            match load_font_file(path) {
                Ok(font) => {
                    tracing::info!(path = %path.display(), "Using custom label font");
                    return ResolvedFont {
                        font,
                        source: FontSource::Custom(path.clone()),
                    };
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Custom font unusable, trying system fonts: {e}");
                }
            }
        }

        for path in &self.system {
            match load_font_file(path) {
                Ok(font) => {
                    tracing::info!(path = %path.display(), "Using system font for labels");
                    return ResolvedFont {
                        font,
                        source: FontSource::System(path.clone()),
                    };
                }
                Err(e) => tracing::debug!(path = %path.display(), "Font candidate skipped: {e}"),
            }
        }

        tracing::info!("No scalable font found, using built-in bitmap font");
        ResolvedFont {
            font: LabelFont::Builtin,
            source: FontSource::Builtin,
        }
    }
}

/// Read and parse one TTF/OTF file.
pub fn load_font_file(path: &Path) -> Result<LabelFont, FontError> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_FONT_SIZE {
        return Err(FontError::FileTooLarge);
    }
    let data = std::fs::read(path)?;
    Ok(LabelFont::from_bytes(data)?)
}

fn system_font_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Helvetica.ttf",
            "/System/Library/Fonts/Helvetica.ttc",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &[
            "C:\\Windows\\Fonts\\arial.ttf",
            "C:\\Windows\\Fonts\\segoeui.ttf",
            "C:\\Windows\\Fonts\\verdana.ttf",
        ]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
        ]
    }
}
