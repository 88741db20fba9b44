use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::{color::Color8, error::DumpError};

/// The analyzer's screen is a fixed 480x320 TFT, so the canvas is too.
pub const WIDTH: u32 = 480;
pub const HEIGHT: u32 = 320;

/// Pixels the dump never paints stay this colour, so holes in a capture are obvious at a glance.
const BACKGROUND: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// The in-memory raster being painted. Owned by the render pass and only serialized once the
/// whole dump has decoded cleanly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Creates a fresh canvas filled with the background colour.
    pub fn new() -> Self {
        Canvas {
            pixels: RgbaImage::from_pixel(WIDTH, HEIGHT, BACKGROUND),
        }
    }

    /// Whether `(x, y)` lands on the raster at all.
    pub fn contains(x: i32, y: i32) -> bool {
        (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y)
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color8) {
        self.pixels.put_pixel(x, y, color.to_rgba());
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Writes the canvas out as a png.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DumpError> {
        self.pixels.save(path)?;

        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_all_background() {
        let canvas = Canvas::new();

        assert_eq!(canvas.pixel(0, 0), BACKGROUND);
        assert_eq!(canvas.pixel(WIDTH - 1, HEIGHT - 1), BACKGROUND);
    }

    #[test]
    fn contains_matches_the_raster() {
        assert!(Canvas::contains(0, 0));
        assert!(Canvas::contains(479, 319));
        assert!(!Canvas::contains(480, 0));
        assert!(!Canvas::contains(0, 320));
        assert!(!Canvas::contains(-1, 0));
        assert!(!Canvas::contains(0, -1));
    }

    #[test]
    fn put_pixel_writes_the_expanded_colour() {
        let mut canvas = Canvas::new();

        canvas.put_pixel(3, 7, Color8(0xFF));

        assert_eq!(canvas.pixel(3, 7), Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(4, 7), BACKGROUND);
    }
}
