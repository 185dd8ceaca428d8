//! Ray and selection behavior options.

use serde::{Deserialize, Serialize};

/// Ray-interaction tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InteractionOptions {
    /// Visual ray indicator length when nothing is hit, in meters.
    pub default_ray_length: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            default_ray_length: 5.0,
        }
    }
}
