//! Frame storage, including the hidden placeholder frame.

use log::debug;

use crate::{EditorError, PixelBuffer, Result, Rgb};

/// Store index the hidden placeholder occupies while it exists.
pub const PLACEHOLDER_INDEX: usize = 1;

/// Remap a held index after the frame at `removed` was deleted.
///
/// Indices below `removed` are kept, indices above it shift down by one, and
/// the removed index itself has no successor.
///
/// ```rust
/// use minipixel_core::shift_after_removal;
///
/// assert_eq!(shift_after_removal(0, 2), Some(0));
/// assert_eq!(shift_after_removal(2, 2), None);
/// assert_eq!(shift_after_removal(3, 2), Some(2));
/// ```
#[inline]
pub fn shift_after_removal(index: usize, removed: usize) -> Option<usize> {
    use std::cmp::Ordering;
    match index.cmp(&removed) {
        Ordering::Less => Some(index),
        Ordering::Equal => None,
        Ordering::Greater => Some(index - 1),
    }
}

/// Remap a held index after a frame was inserted at `inserted`.
#[inline]
pub fn shift_after_insertion(index: usize, inserted: usize) -> usize {
    if index >= inserted {
        index + 1
    } else {
        index
    }
}

/// Ordered collection of frames.
///
/// When only one real frame exists, a blank placeholder sits at
/// [`PLACEHOLDER_INDEX`] so the animation always has two entries to cycle
/// over. The placeholder is readable but never paintable or deletable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameStore {
    frames: Vec<PixelBuffer>,
    placeholder: bool,
}

impl Default for FrameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStore {
    /// Create a store holding one blank frame and the placeholder.
    pub fn new() -> Self {
        let mut store = Self {
            frames: Vec::with_capacity(2),
            placeholder: false,
        };
        store.initialize();
        store
    }

    /// Reset to one blank real frame plus the placeholder.
    pub fn initialize(&mut self) {
        self.frames.clear();
        self.frames.push(PixelBuffer::blank());
        self.frames.push(PixelBuffer::blank());
        self.placeholder = true;
    }

    /// Append a blank frame and return its index.
    pub fn add_frame(&mut self) -> usize {
        self.frames.push(PixelBuffer::blank());
        self.frames.len() - 1
    }

    /// Delete the frame at `index` and return its pixels.
    ///
    /// Fails with `InvalidIndex` for out-of-range indices and the
    /// placeholder, and with `LastFrame` when `index` is the only real frame.
    pub fn delete_frame(&mut self, index: usize) -> Result<PixelBuffer> {
        self.check_editable(index)?;
        if self.real_frame_count() <= 1 {
            return Err(EditorError::LastFrame);
        }
        debug!("deleting frame {index} of {}", self.frames.len());
        Ok(self.frames.remove(index))
    }

    /// Get the frame at `index`. The placeholder is readable.
    pub fn get_frame(&self, index: usize) -> Result<&PixelBuffer> {
        self.frames.get(index).ok_or(EditorError::InvalidIndex {
            index,
            len: self.frames.len(),
        })
    }

    /// Set one pixel of a real frame.
    pub fn paint_pixel(&mut self, index: usize, pos: usize, color: Rgb) -> Result<()> {
        self.check_editable(index)?;
        self.frames[index].set_pixel(pos, color)
    }

    /// Insert the placeholder if it is missing.
    ///
    /// Returns the index it now occupies, or None if it already existed.
    pub fn insert_placeholder(&mut self) -> Option<usize> {
        if self.placeholder {
            return None;
        }
        let index = PLACEHOLDER_INDEX.min(self.frames.len());
        self.frames.insert(index, PixelBuffer::blank());
        self.placeholder = true;
        debug!("inserted placeholder frame at {index}");
        Some(index)
    }

    /// Remove the placeholder if present, returning the index it occupied.
    pub fn remove_placeholder(&mut self) -> Option<usize> {
        if !self.placeholder {
            return None;
        }
        self.frames.remove(PLACEHOLDER_INDEX);
        self.placeholder = false;
        debug!("removed placeholder frame from {PLACEHOLDER_INDEX}");
        Some(PLACEHOLDER_INDEX)
    }

    #[inline]
    pub fn has_placeholder(&self) -> bool {
        self.placeholder
    }

    #[inline]
    pub fn is_placeholder(&self, index: usize) -> bool {
        self.placeholder && index == PLACEHOLDER_INDEX
    }

    /// Number of stored frames, placeholder included.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Never true for an initialized store.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames the user created.
    #[inline]
    pub fn real_frame_count(&self) -> usize {
        self.frames.len() - usize::from(self.placeholder)
    }

    /// Store indices of the real frames, in storage order.
    pub fn real_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.frames.len()).filter(move |&i| !self.is_placeholder(i))
    }

    fn check_editable(&self, index: usize) -> Result<()> {
        if index >= self.frames.len() || self.is_placeholder(index) {
            return Err(EditorError::InvalidIndex {
                index,
                len: self.frames.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize() {
        let store = FrameStore::new();
        assert_eq!(store.len(), 2);
        assert_eq!(store.real_frame_count(), 1);
        assert!(store.has_placeholder());
        assert!(store.is_placeholder(PLACEHOLDER_INDEX));
        assert!(!store.is_placeholder(0));
        assert!(store.get_frame(1).unwrap().is_blank());
    }

    #[test]
    fn test_delete_last_frame_rejected() {
        let mut store = FrameStore::new();
        assert_eq!(store.delete_frame(0), Err(EditorError::LastFrame));
        assert_eq!(store, FrameStore::new());
    }

    #[test]
    fn test_placeholder_not_editable() {
        let mut store = FrameStore::new();
        assert_eq!(
            store.delete_frame(1),
            Err(EditorError::InvalidIndex { index: 1, len: 2 })
        );
        assert_eq!(
            store.paint_pixel(1, 0, Rgb::BLACK),
            Err(EditorError::InvalidIndex { index: 1, len: 2 })
        );
        assert!(store.get_frame(1).unwrap().is_blank());
    }

    #[test]
    fn test_paint_pixel() {
        let mut store = FrameStore::new();
        store.remove_placeholder();
        let index = store.add_frame();
        assert_eq!(index, 1);

        store.paint_pixel(1, 42, Rgb::BLACK).unwrap();
        assert_eq!(store.get_frame(1).unwrap().pixel(42), Some(Rgb::BLACK));
        assert!(store.get_frame(0).unwrap().is_blank());

        assert_eq!(
            store.paint_pixel(0, 256, Rgb::BLACK),
            Err(EditorError::InvalidPixelPosition { position: 256 })
        );
        assert_eq!(
            store.paint_pixel(5, 0, Rgb::BLACK),
            Err(EditorError::InvalidIndex { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_delete_returns_frame() {
        let mut store = FrameStore::new();
        store.remove_placeholder();
        store.add_frame();
        store.add_frame();
        store.paint_pixel(1, 0, Rgb::BLACK).unwrap();

        let removed = store.delete_frame(1).unwrap();
        assert_eq!(removed.pixel(0), Some(Rgb::BLACK));
        assert_eq!(store.len(), 2);
        assert!(store.get_frame(1).unwrap().is_blank());
    }

    #[test]
    fn test_placeholder_insert_remove() {
        let mut store = FrameStore::new();
        assert_eq!(store.insert_placeholder(), None);
        assert_eq!(store.remove_placeholder(), Some(1));
        assert_eq!(store.remove_placeholder(), None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.insert_placeholder(), Some(1));
        assert_eq!(store.real_indices().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_shift_rules() {
        assert_eq!(shift_after_removal(1, 3), Some(1));
        assert_eq!(shift_after_removal(3, 3), None);
        assert_eq!(shift_after_removal(4, 3), Some(3));
        assert_eq!(shift_after_insertion(0, 1), 0);
        assert_eq!(shift_after_insertion(1, 1), 2);
    }
}
