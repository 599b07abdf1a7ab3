//! TOML-backed window configuration
//!
//! Lets applications keep their window setup in a config file instead of
//! hardcoding it. A [`WindowConfig`] deserializes from TOML with every
//! field optional and converts into [`WindowOptions`] plus the initial
//! size.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::window::WindowOptions;

/// Errors from loading or converting a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML or has wrongly typed fields
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// An icon file could not be opened or decoded
    #[error("failed to load icon: {0}")]
    Icon(#[from] image::ImageError),
}

/// Declarative window setup, usually loaded from a TOML file
///
/// Missing fields take the same defaults as [`WindowOptions`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title at the top of the window
    pub title: String,
    /// Initial width of the drawable area in logical pixels
    pub width: u32,
    /// Initial height of the drawable area in logical pixels
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Whether the window has borders and decorations
    pub decorated: bool,
    /// Float above regular windows
    pub always_on_top: bool,
    /// Iconify a fullscreen window automatically on focus loss
    pub auto_iconify: bool,
    /// Request a framebuffer with per-pixel transparency
    pub transparent_framebuffer: bool,
    /// Synchronize buffer swaps with the monitor refresh rate
    pub vsync: bool,
    /// Icon image files offered to the window system
    pub icon_paths: Vec<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: 800,
            height: 600,
            resizable: false,
            decorated: true,
            always_on_top: false,
            auto_iconify: false,
            transparent_framebuffer: false,
            vsync: false,
            icon_paths: Vec::new(),
        }
    }
}

impl WindowConfig {
    /// Load a configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Parse a configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the string is not valid TOML.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Convert into creation options, loading any icon files
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Icon`] when an icon file cannot be decoded.
    pub fn to_options(&self) -> Result<WindowOptions, ConfigError> {
        let icons = self
            .icon_paths
            .iter()
            .map(image::open)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(WindowOptions::new()
            .with_title(self.title.clone())
            .with_icon(icons)
            .with_resizable(self.resizable)
            .with_decorated(self.decorated)
            .with_always_on_top(self.always_on_top)
            .with_auto_iconify(self.auto_iconify)
            .with_transparent_framebuffer(self.transparent_framebuffer)
            .with_vsync(self.vsync))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_the_defaults() {
        let config = WindowConfig::from_toml_str("").unwrap();
        assert_eq!(config.title, "");
        assert_eq!((config.width, config.height), (800, 600));
        assert!(config.decorated);
        assert!(!config.vsync);
    }

    #[test]
    fn fields_override_selectively() {
        let config = WindowConfig::from_toml_str(
            r#"
            title = "asteroids"
            width = 1280
            height = 720
            resizable = true
            vsync = true
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "asteroids");
        assert_eq!((config.width, config.height), (1280, 720));
        assert!(config.resizable);
        assert!(config.vsync);
        assert!(config.decorated);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = WindowConfig::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn options_carry_the_configured_flags() {
        let config = WindowConfig::from_toml_str("title = \"t\"\nvsync = true").unwrap();
        let options = config.to_options().unwrap();
        assert!(options.vsync);
        assert_eq!(options.title, "t");
        assert!(options.icon.is_empty());
    }
}
