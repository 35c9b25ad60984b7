//! Shared output surface for render results.

use std::path::Path;

use glint_core::Color;

/// Convert a color to 8-bit RGBA, clamping each channel to [0, 1] before
/// scaling to 0-255.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * color.x.clamp(0.0, 1.0)) as u8;
    let g = (255.0 * color.y.clamp(0.0, 1.0)) as u8;
    let b = (255.0 * color.z.clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Pixel buffer holding the render output.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    ///
    /// Panics if (x, y) is outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    ///
    /// Panics if (x, y) is outside the buffer.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Persist the framebuffer to disk; the format is chosen from the
    /// path's extension (png, bmp, ...).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        let img = image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(color_to_rgba(self.get(x, y)))
        });
        img.save(path)
    }
}
