//! Camera projection and placement options.

use serde::{Deserialize, Serialize};

/// Perspective projection parameters and the initial pose (a standing
/// viewer at typical VR eye height).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Initial eye position.
    pub eye: [f32; 3],
    /// Initial look-at target.
    pub target: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 0.1,
            zfar: 10.0,
            eye: [0.0, 1.6, 3.0],
            target: [0.0, 1.6, 0.0],
        }
    }
}
