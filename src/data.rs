//! Core raster data for a single frame.

use crate::{EditorError, Result, Rgb};

/// Grid width in pixels.
pub const GRID_WIDTH: usize = 16;
/// Grid height in pixels.
pub const GRID_HEIGHT: usize = 16;
/// Number of pixels in every frame.
pub const PIXEL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;

/// One frame's raster: exactly [`PIXEL_COUNT`] colors, row-major.
///
/// Position `i` maps to `x = i % 16`, `y = i / 16`. The buffer is mutated in
/// place and never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelBuffer {
    pixels: Vec<Rgb>,
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::blank()
    }
}

impl PixelBuffer {
    /// A fully white frame.
    pub fn blank() -> Self {
        Self::filled(Rgb::WHITE)
    }

    /// A frame with every pixel set to `color`.
    pub fn filled(color: Rgb) -> Self {
        Self {
            pixels: vec![color; PIXEL_COUNT],
        }
    }

    /// Get the color at a linear position.
    ///
    /// Returns None if position is out of bounds.
    #[inline]
    pub fn pixel(&self, pos: usize) -> Option<Rgb> {
        self.pixels.get(pos).copied()
    }

    /// Get the color at a grid coordinate.
    ///
    /// Returns None if the coordinate is outside the grid.
    #[inline]
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < GRID_WIDTH && y < GRID_HEIGHT {
            Some(self.pixels[y * GRID_WIDTH + x])
        } else {
            None
        }
    }

    /// Set the color at a linear position.
    pub fn set_pixel(&mut self, pos: usize, color: Rgb) -> Result<()> {
        let slot = self
            .pixels
            .get_mut(pos)
            .ok_or(EditorError::InvalidPixelPosition { position: pos })?;
        *slot = color;
        Ok(())
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Check if every pixel is white.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == Rgb::WHITE)
    }

    /// Convert a linear position into `(x, y)` grid coordinates.
    #[inline]
    pub fn coords(pos: usize) -> (usize, usize) {
        (pos % GRID_WIDTH, pos / GRID_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_frame() {
        let frame = PixelBuffer::blank();
        assert_eq!(frame.pixels().len(), PIXEL_COUNT);
        assert!(frame.is_blank());
        assert_eq!(frame, PixelBuffer::default());
    }

    #[test]
    fn test_pixel_accessors() {
        let mut frame = PixelBuffer::blank();
        let red = Rgb::new(255, 0, 0);
        frame.set_pixel(17, red).unwrap();

        assert_eq!(frame.pixel(17), Some(red));
        assert_eq!(frame.pixel_at(1, 1), Some(red));
        assert_eq!(frame.pixel_at(0, 1), Some(Rgb::WHITE));
        assert_eq!(frame.pixel(256), None);
        assert_eq!(frame.pixel_at(16, 0), None);
        assert!(!frame.is_blank());
    }

    #[test]
    fn test_set_pixel_out_of_range() {
        let mut frame = PixelBuffer::blank();
        let err = frame.set_pixel(PIXEL_COUNT, Rgb::BLACK).unwrap_err();
        assert_eq!(err, EditorError::InvalidPixelPosition { position: 256 });
        assert!(frame.is_blank());
    }

    #[test]
    fn test_coords() {
        assert_eq!(PixelBuffer::coords(0), (0, 0));
        assert_eq!(PixelBuffer::coords(15), (15, 0));
        assert_eq!(PixelBuffer::coords(16), (0, 1));
        assert_eq!(PixelBuffer::coords(255), (15, 15));
    }
}
