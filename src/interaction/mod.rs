//! Per-controller selection state and the pick-and-place state machine.

mod controller;
mod system;

pub use controller::{ControllerId, ControllerState, TargetRayMode};
pub use system::{InteractionSystem, SelectOutcome};
