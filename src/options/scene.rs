//! Scene population and layout options.

use serde::{Deserialize, Serialize};

/// Parameters for the bootstrap primitives, model placement, and the
/// anchored button.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Number of random primitives spawned at setup.
    pub primitive_count: usize,
    /// Half-extent of the random spawn area on x and z, in meters.
    pub spawn_half_extent: f32,
    /// Maximum random spawn height on y, in meters.
    pub spawn_height: f32,
    /// Local offset the installed model root is placed at.
    pub model_offset: [f32; 3],
    /// Uniform scale applied to the installed model root.
    pub model_scale: f32,
    /// Amplitude of the model's idle bounce, in meters.
    pub bounce_amplitude: f32,
    /// Normalized device coordinates the button is anchored toward.
    pub button_anchor_ndc: [f32; 2],
    /// Distance from the eye to the anchored button, in meters.
    pub button_distance: f32,
    /// Vertical lift applied to the anchored button, in meters.
    pub button_lift: f32,
    /// Pick-proxy radius of the button, in meters.
    pub button_radius: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            primitive_count: 5,
            spawn_half_extent: 2.0,
            spawn_height: 2.0,
            model_offset: [0.0, 1.3, 0.0],
            model_scale: 0.1,
            bounce_amplitude: 0.06,
            button_anchor_ndc: [-0.9, -0.4],
            button_distance: 0.5,
            button_lift: 0.08,
            button_radius: 0.08,
        }
    }
}
