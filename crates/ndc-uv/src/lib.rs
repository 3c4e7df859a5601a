//! Pixel-space to normalized-coordinate mapping.
//!
//! This crate owns the one transform shaders use to turn a pixel position into
//! aspect-corrected UV space, both as a CPU function and as a WGSL include.

pub mod coords;
pub mod error;
pub mod logging;
pub mod shader;

pub use coords::{denormalize_uv, normalize_uv, try_normalize_uv, Vec2, Viewport};
pub use error::UvError;
