use serde::{Deserialize, Serialize};

/// RGBA color with components in 0..=1.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba([r, g, b, a])
    }

    /// 8-bit channels with a unit-range alpha, the form layer configs use.
    pub const fn from_u8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Rgba([
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a,
        ])
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Rgba([r, g, b, 1.0])
    }

    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    pub fn alpha(self) -> f32 {
        self.0[3]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba([1.0, 1.0, 1.0, 1.0])
    }
}
