//! Mesh materials and the emissive highlight channel.
//!
//! Hover and grab highlights live on separate components of the emissive
//! channel so a hovered-then-grabbed mesh never needs channel mixing and
//! each state restores exactly to its rest value (0.0). Meshes whose
//! material carries no emissive channel are valid pick candidates but are
//! skipped by highlight mutation.

use glam::Vec3;

/// Emissive highlight channel of a mesh material.
///
/// Rest value for both components is 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Emissive {
    /// Hover highlight intensity (rendered on the red channel).
    pub hover: f32,
    /// Grab highlight intensity (rendered on the blue channel).
    pub grab: f32,
}

impl Emissive {
    /// Whether both components sit at their rest value.
    #[must_use]
    pub fn is_rest(&self) -> bool {
        self.hover == 0.0 && self.grab == 0.0
    }
}

/// Surface appearance of a pickable mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base albedo color, linear RGB in [0, 1].
    pub base_color: Vec3,
    /// Optional highlight channel. `None` for materials that cannot be
    /// highlighted; selection logic must tolerate its absence.
    pub emissive: Option<Emissive>,
}

impl Material {
    /// A highlightable material with the given base color.
    #[must_use]
    pub fn with_emissive(base_color: Vec3) -> Self {
        Self {
            base_color,
            emissive: Some(Emissive::default()),
        }
    }

    /// A material without a highlight channel (e.g. unlit UI surfaces).
    #[must_use]
    pub fn plain(base_color: Vec3) -> Self {
        Self {
            base_color,
            emissive: None,
        }
    }

    /// Back-fill an emissive channel if the material lacks one.
    ///
    /// Imported model parts get this treatment at install time so every
    /// composite descendant can be highlighted.
    pub fn ensure_emissive(&mut self) {
        if self.emissive.is_none() {
            self.emissive = Some(Emissive::default());
        }
    }
}
