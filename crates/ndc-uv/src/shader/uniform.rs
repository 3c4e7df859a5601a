use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;

/// CPU mirror of the WGSL `ViewportUniform` in the helpers include.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ViewportUniform {
    pub size: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Viewport> for ViewportUniform {
    #[inline]
    fn from(viewport: Viewport) -> Self {
        Self {
            size: [viewport.width, viewport.height],
            _pad: [0.0; 2],
        }
    }
}
