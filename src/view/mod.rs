//! Presentation layer: view state, its controller, and text rendering.
//!
//! DESIGN
//! ======
//! State is split the same way a component tree would consume it: `state`
//! holds the pure transitions, `controller` wraps them around the async
//! generation call, and `render` turns a snapshot into text.

pub mod clipboard;
pub mod controller;
pub mod render;
pub mod state;
