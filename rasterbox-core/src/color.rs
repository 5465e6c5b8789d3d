use derive_more::{Display, From, Into};

/// Packed 32-bit ARGB color (`0xAARRGGBB`).
///
/// The rasterizer never looks inside a color: there is no blending, a later
/// write replaces whatever was in the cell before.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, From, Into)]
#[display("{:#010x}", _0)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self(0xff00_0000);
    pub const GREY: Self = Self(0xff88_8888);
    pub const RED: Self = Self(0xffff_0000);
    pub const YELLOW: Self = Self(0xffff_ff00);

    pub const fn new(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }
}
