use image::Rgba;

/// One packed framebuffer byte, RGB in 3-3-2 layout: bits 7-5 are red, 4-2 green, 1-0 blue. The
/// analyzer's TFT runs in this mode to halve the bandwidth of a full dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color8(pub u8);

impl Color8 {
    pub fn red(self) -> u8 {
        (self.0 >> 5) & 0x7
    }

    pub fn green(self) -> u8 {
        (self.0 >> 2) & 0x7
    }

    pub fn blue(self) -> u8 {
        self.0 & 0x3
    }

    /// Expands the packed byte to 8-bit RGBA at full opacity. Channels rescale linearly with
    /// rounding, so 0x00 comes out black and 0xFF comes out white.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([
            rescale(self.red(), 7),
            rescale(self.green(), 7),
            rescale(self.blue(), 3),
            255,
        ])
    }
}

/// `round(component * 255 / max)` in integer arithmetic.
fn rescale(component: u8, max: u8) -> u8 {
    ((component as u32 * 255 + max as u32 / 2) / max as u32) as u8
}
