//! Highlight channel intensities.

use serde::{Deserialize, Serialize};

/// Intensities written into the emissive highlight channel. Rest value is
/// always 0.0; these are only the "on" levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HighlightOptions {
    /// Hover highlight intensity.
    pub hover_intensity: f32,
    /// Grab highlight intensity.
    pub grab_intensity: f32,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            hover_intensity: 1.0,
            grab_intensity: 1.0,
        }
    }
}
