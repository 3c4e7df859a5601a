use thiserror::Error;

/// Rejections produced by [`try_normalize_uv`](crate::coords::try_normalize_uv).
///
/// The unchecked [`normalize_uv`](crate::coords::normalize_uv) never returns
/// these; it lets non-finite values propagate instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum UvError {
    #[error("degenerate render target size {width}x{height}: both sides must be positive and finite")]
    DegenerateSize { width: f32, height: f32 },

    #[error("position ({x}, {y}) is not finite")]
    NonFinitePosition { x: f32, y: f32 },
}
