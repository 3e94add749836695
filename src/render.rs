//! Thumbnail draw commands for frames.

use crate::{PixelBuffer, Rgb, GRID_HEIGHT, GRID_WIDTH};

/// Default thumbnail scale: a 16x16 frame becomes a 64x64 canvas.
pub const THUMBNAIL_SCALE: u32 = 4;

/// Result of a thumbnail render containing fill commands.
///
/// This is a platform-agnostic representation of what needs to be drawn.
/// Each consumer can interpret these commands for their rendering backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Rectangles to fill
    pub rects: Vec<FillRect>,
}

/// A solid rectangle covering one run of equal pixels in a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: Rgb,
}

impl FillRect {
    /// Get the color as a CSS-compatible string.
    pub fn color_string(&self) -> String {
        self.color.css()
    }
}

/// Generate fill commands for a scaled, unsmoothed frame thumbnail.
///
/// ## Optimization
///
/// Consecutive pixels in a row with the same color are merged into one
/// rectangle to reduce the number of draw calls.
///
/// ## Example
///
/// ```rust
/// use minipixel_core::{render::thumbnail, PixelBuffer, Rgb};
///
/// let mut frame = PixelBuffer::blank();
/// frame.set_pixel(3, Rgb::BLACK).unwrap();
///
/// let thumb = thumbnail(&frame, 4);
/// assert_eq!((thumb.width, thumb.height), (64, 64));
/// // Row 0 splits into white, black, white; rows 1-15 are one rect each.
/// assert_eq!(thumb.rects.len(), 3 + 15);
/// ```
pub fn thumbnail(frame: &PixelBuffer, scale: u32) -> Thumbnail {
    let scale = scale.max(1);
    let pixels = frame.pixels();
    let mut rects = Vec::new();

    for row in 0..GRID_HEIGHT {
        let mut col = 0;
        while col < GRID_WIDTH {
            let color = pixels[row * GRID_WIDTH + col];
            let start_col = col;
            col += 1;

            // Extend the run while the color holds
            while col < GRID_WIDTH && pixels[row * GRID_WIDTH + col] == color {
                col += 1;
            }

            rects.push(FillRect {
                x: start_col as u32 * scale,
                y: row as u32 * scale,
                width: (col - start_col) as u32 * scale,
                height: scale,
                color,
            });
        }
    }

    Thumbnail {
        width: GRID_WIDTH as u32 * scale,
        height: GRID_HEIGHT as u32 * scale,
        rects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_frame_one_rect_per_row() {
        let thumb = thumbnail(&PixelBuffer::blank(), THUMBNAIL_SCALE);
        assert_eq!(thumb.rects.len(), GRID_HEIGHT);
        assert!(thumb.rects.iter().all(|r| r.width == 64 && r.height == 4));
        assert_eq!(thumb.rects[15].y, 60);
    }

    #[test]
    fn test_runs_split_on_color_change() {
        let mut frame = PixelBuffer::blank();
        let red = Rgb::new(255, 0, 0);
        frame.set_pixel(16, red).unwrap();
        frame.set_pixel(17, red).unwrap();
        frame.set_pixel(31, Rgb::BLACK).unwrap();

        let thumb = thumbnail(&frame, 2);
        let row1: Vec<_> = thumb.rects.iter().filter(|r| r.y == 2).collect();
        assert_eq!(row1.len(), 3);
        assert_eq!((row1[0].x, row1[0].width, row1[0].color), (0, 4, red));
        assert_eq!((row1[1].x, row1[1].width, row1[1].color), (4, 26, Rgb::WHITE));
        assert_eq!((row1[2].x, row1[2].width), (30, 2));
        assert_eq!(row1[2].color_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_zero_scale_treated_as_one() {
        let thumb = thumbnail(&PixelBuffer::blank(), 0);
        assert_eq!((thumb.width, thumb.height), (16, 16));
    }
}
