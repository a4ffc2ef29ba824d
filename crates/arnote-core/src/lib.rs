//! Platform-agnostic core for the arnote AR ticket overlay.
//!
//! Owns the anchor-relative scene subtree, the three-pane state machine,
//! touch hit testing, and frame composition. Platform crates supply tracking
//! events and consume draw commands through the arnote-hal traits.

pub mod input;
pub mod render;
pub mod scene;
pub mod session;
