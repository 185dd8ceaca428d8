//! Controller identity, modality tags, and per-controller state.

use crate::scene::NodeId;

/// Logical controller identity. Hover evaluation always runs in
/// [`ControllerId::ORDER`] so per-frame results are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerId {
    /// First controller (typically the left hand).
    First,
    /// Second controller (typically the right hand).
    Second,
}

impl ControllerId {
    /// Fixed evaluation order for per-frame updates.
    pub const ORDER: [Self; 2] = [Self::First, Self::Second];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Interaction modality reported by a select event's input source.
///
/// Mirrors the XR target-ray modes: a tracked pointer casts a visible ray;
/// screen-tap and gaze inputs carry no persistent ray, so hover
/// highlighting is suppressed for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRayMode {
    /// Handheld controller pointing a ray.
    TrackedPointer,
    /// Touch-screen tap-to-select.
    Screen,
    /// Head-gaze selection.
    Gaze,
}

impl TargetRayMode {
    /// Whether per-frame hover evaluation is suppressed for this modality.
    #[must_use]
    pub fn suppresses_hover(self) -> bool {
        !matches!(self, Self::TrackedPointer)
    }
}

/// Mutable state of one controller, created at controller attach time and
/// live for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerState {
    /// The object currently grabbed by this controller; `None` when idle.
    pub selected: Option<NodeId>,
    /// The visual sub-part that was under the ray when the grab started.
    /// Only set for composite grabs, where the grab target (the composite
    /// root) is not the mesh that got highlighted.
    pub selected_mesh: Option<NodeId>,
    /// Modality of the last select-start event seen on this controller.
    pub target_ray_mode: Option<TargetRayMode>,
    /// Length of the visual ray indicator, in meters. Matches the hit
    /// distance while hovering, otherwise the configured default.
    pub ray_length: f32,
}

impl ControllerState {
    /// Idle state with the given default ray length.
    #[must_use]
    pub fn new(default_ray_length: f32) -> Self {
        Self {
            selected: None,
            selected_mesh: None,
            target_ray_mode: None,
            ray_length: default_ray_length,
        }
    }

    /// Whether this controller is currently holding an object.
    #[must_use]
    pub fn is_grabbing(&self) -> bool {
        self.selected.is_some()
    }
}
