use super::Vec2;

/// Render target size.
///
/// Supplies the `size` argument of the UV transform. Nothing here enforces
/// validity; call [`Viewport::is_valid`] when the source is untrusted.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.size() * 0.5
    }

    /// Width over height. Not finite when `height == 0`.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }

    /// See [`normalize_uv`](super::normalize_uv).
    #[inline]
    pub fn normalize(self, position: Vec2) -> Vec2 {
        super::normalize_uv(position, self.size())
    }

    /// See [`denormalize_uv`](super::denormalize_uv).
    #[inline]
    pub fn denormalize(self, uv: Vec2) -> Vec2 {
        super::denormalize_uv(uv, self.size())
    }
}

impl From<Vec2> for Viewport {
    #[inline]
    fn from(size: Vec2) -> Self {
        Self::new(size.x, size.y)
    }
}

impl From<Viewport> for Vec2 {
    #[inline]
    fn from(viewport: Viewport) -> Self {
        viewport.size()
    }
}
