//! The event enum fed into [`Session::handle_event`].
//!
//! The host runtime's input subsystem dispatches these synchronously,
//! between frames — never concurrently with the frame callback or with
//! each other, so the session needs no locking.
//!
//! [`Session::handle_event`]: crate::session::Session::handle_event

use crate::interaction::{ControllerId, TargetRayMode};

/// A discrete input event from the host runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XrInputEvent {
    /// A controller's select gesture began (trigger press, screen tap).
    SelectStart {
        /// Originating controller.
        controller: ControllerId,
        /// Interaction modality reported by the input source.
        ray_mode: TargetRayMode,
    },
    /// A controller's select gesture ended.
    SelectEnd {
        /// Originating controller.
        controller: ControllerId,
    },
    /// The viewport changed size; the projection aspect must follow.
    ViewportResized {
        /// New viewport width in pixels.
        width: f32,
        /// New viewport height in pixels.
        height: f32,
    },
    /// The user toggled the immersive (stereoscopic) session.
    ToggleImmersive,
}
