//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (interaction, highlighting, scene population,
//! camera) are consolidated here. Options serialize to/from TOML so a host
//! can ship presets or override individual sections.

mod camera;
mod highlight;
mod interaction;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use highlight::HighlightOptions;
pub use interaction::InteractionOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::XrGripError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[highlight]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Ray and selection behavior.
    pub interaction: InteractionOptions,
    /// Highlight channel intensities.
    pub highlight: HighlightOptions,
    /// Scene population and layout.
    pub scene: SceneOptions,
    /// Camera projection and placement.
    pub camera: CameraOptions,
}

impl Options {
    /// Parse options from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`XrGripError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, XrGripError> {
        toml::from_str(s)
            .map_err(|e| XrGripError::OptionsParse(e.to_string()))
    }

    /// Serialize options to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`XrGripError::OptionsParse`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, XrGripError> {
        toml::to_string_pretty(self)
            .map_err(|e| XrGripError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`XrGripError::Io`] when the file cannot be read, or
    /// [`XrGripError::OptionsParse`] on malformed TOML.
    pub fn from_toml_file(path: &Path) -> Result<Self, XrGripError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Write options to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`XrGripError::Io`] or [`XrGripError::OptionsParse`].
    pub fn to_toml_file(&self, path: &Path) -> Result<(), XrGripError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
