//! Platform-agnostic input events.

mod event;

pub use event::XrInputEvent;
