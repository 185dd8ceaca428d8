// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Pick-and-place interaction core for XR scene graphs.
//!
//! Xrgrip owns the per-controller selection state of a WebXR-style scene:
//! ray picking against a dynamic candidate set, hover highlighting, and the
//! grab/release lifecycle in which an object is temporarily reparented from
//! the shared scene group to the grabbing controller (preserving its world
//! transform) until the controller releases it.
//!
//! Rendering, asset decoding, VR session negotiation, and hand tracking are
//! deliberately outside this crate; the host runtime feeds controller poses
//! and select events in, drives [`session::Session::frame`] once per
//! rendered frame, and rasterizes the resulting scene.
//!
//! # Key entry points
//!
//! - [`session::Session`] - the frame-loop context object
//! - [`scene::Scene`] - the node arena with reparenting support
//! - [`interaction::InteractionSystem`] - select/hover state machine
//! - [`options::Options`] - runtime configuration (TOML presets)

pub mod asset;
pub mod camera;
pub mod error;
pub mod input;
pub mod interaction;
pub mod options;
pub mod picking;
pub mod scene;
pub mod session;
