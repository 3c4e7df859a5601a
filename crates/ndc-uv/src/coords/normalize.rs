use super::{Vec2, Viewport};
use crate::error::UvError;

/// Maps a pixel-space `position` into aspect-corrected UV space.
///
/// `position / size` lands in `[0, 1]` for points inside the target, which is
/// then remapped to `[-1, 1]` and the x axis is scaled by `size.x / size.y`.
/// The result spans `[-aspect, aspect] x [-1, 1]` so a circle in pixels stays
/// a circle in UV.
///
/// Precondition: `size.y > 0`. This is not checked; a zero height makes the
/// x component non-finite. Use [`try_normalize_uv`] to reject such input.
#[inline]
pub fn normalize_uv(position: Vec2, size: Vec2) -> Vec2 {
    let mut uv = position / size;
    uv = uv * 2.0 - Vec2::splat(1.0);
    uv.x *= size.x / size.y;
    uv
}

/// Inverse of [`normalize_uv`] for a fixed `size`.
///
/// Same precondition as the forward transform, plus `size.x != 0`.
#[inline]
pub fn denormalize_uv(uv: Vec2, size: Vec2) -> Vec2 {
    let unscaled = Vec2::new(uv.x * size.y / size.x, uv.y);
    (unscaled + Vec2::splat(1.0)) * 0.5 * size
}

/// Checked [`normalize_uv`].
///
/// Rejects sizes that are not strictly positive and finite, and positions
/// that are not finite. Accepted input produces exactly the unchecked result.
pub fn try_normalize_uv(position: Vec2, size: Vec2) -> Result<Vec2, UvError> {
    if !Viewport::from(size).is_valid() {
        log::debug!("try_normalize_uv: rejected size {}x{}", size.x, size.y);
        return Err(UvError::DegenerateSize { width: size.x, height: size.y });
    }
    if !position.is_finite() {
        log::debug!("try_normalize_uv: rejected position ({}, {})", position.x, position.y);
        return Err(UvError::NonFinitePosition { x: position.x, y: position.y });
    }
    Ok(normalize_uv(position, size))
}
