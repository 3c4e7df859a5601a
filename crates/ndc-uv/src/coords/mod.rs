//! Coordinate types and the pixel-to-UV transform.
//!
//! Pixel space:
//! - Units and origin are the caller's render target
//! - Size is the render target extent in the same units
//!
//! UV space:
//! - Vertical axis spans [-1, 1] across the target
//! - Horizontal axis spans [-aspect, aspect], aspect = width / height

mod normalize;
mod vec2;
mod viewport;

pub use normalize::{denormalize_uv, normalize_uv, try_normalize_uv};
pub use vec2::Vec2;
pub use viewport::Viewport;
