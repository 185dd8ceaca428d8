//! Composite model intake.
//!
//! Decoding the binary asset happens entirely outside this crate; the
//! host's loader delivers either a [`ModelPrototype`] — a flat description
//! of the model's visual parts — or an error. Load failure is non-fatal:
//! the session logs it and keeps running with a reduced candidate set.

use crate::scene::{Material, Transform};

/// One visual part of an imported model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPart {
    /// Part name, useful in logs.
    pub name: String,
    /// Transform relative to the model root.
    pub transform: Transform,
    /// Part material. Parts arriving without an emissive channel get one
    /// back-filled at install time so every descendant is highlightable.
    pub material: Material,
    /// Local-space bounding-sphere radius for ray tests.
    pub bound_radius: f32,
}

/// A loaded model sub-tree, ready to install under the shared group.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPrototype {
    /// Model name; the installed root node is indexed under it.
    pub name: String,
    /// The model's visual parts.
    pub parts: Vec<ModelPart>,
}

/// Log loader progress the way the host's progress callback reports it:
/// a percentage when the total is known, a byte count otherwise.
pub fn log_progress(loaded: u64, total: Option<u64>) {
    match total {
        Some(total) if total > 0 => {
            let percent = (loaded as f64 / total as f64) * 100.0;
            log::info!("loading model: {percent:.2}% completed");
        }
        _ => log::info!("loaded {loaded} bytes"),
    }
}
