//! Structural frame mutations and the placeholder invariant.

use log::debug;

use crate::{AnimationSequence, FrameStore, PixelBuffer, Result};

/// Frame storage together with the playback order over it.
///
/// Every structural change goes through this type so that the placeholder
/// invariant is restored in exactly one place:
///
/// - one real frame: the placeholder is present in both store and sequence;
/// - two or more real frames: the placeholder is in neither.
///
/// ```rust
/// use minipixel_core::Timeline;
///
/// let mut timeline = Timeline::new();
/// assert_eq!(timeline.sequence().as_slice(), &[0, 1]);
///
/// let added = timeline.add_frame();
/// assert_eq!(added, 1);
/// assert!(!timeline.store().has_placeholder());
///
/// timeline.delete_frame(added).unwrap();
/// assert!(timeline.store().has_placeholder());
/// assert_eq!(timeline.sequence().as_slice(), &[0, 1]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    store: FrameStore,
    sequence: AnimationSequence,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to a single blank frame followed by the placeholder.
    pub fn initialize(&mut self) {
        self.store.initialize();
        self.sequence.reset();
        self.reconcile_placeholder();
    }

    /// Append a blank frame to storage and playback.
    ///
    /// Returns the frame's final store index once the placeholder has been
    /// dropped.
    pub fn add_frame(&mut self) -> usize {
        let index = self.store.add_frame();
        self.sequence.on_frame_added(index);
        self.reconcile_placeholder();
        let index = self.store.len() - 1;
        debug!("added frame {index}; sequence {:?}", self.sequence.as_slice());
        index
    }

    /// Delete a real frame from storage and playback.
    pub fn delete_frame(&mut self, index: usize) -> Result<PixelBuffer> {
        let removed = self.store.delete_frame(index)?;
        self.sequence.on_frame_deleted(index);
        self.reconcile_placeholder();
        debug!("deleted frame {index}; sequence {:?}", self.sequence.as_slice());
        Ok(removed)
    }

    /// Restore the placeholder invariant after a structural mutation.
    fn reconcile_placeholder(&mut self) {
        let real = self.store.real_frame_count();
        if real >= 2 {
            if let Some(index) = self.store.remove_placeholder() {
                self.sequence.on_frame_deleted(index);
            }
        } else if let Some(index) = self.store.insert_placeholder() {
            self.sequence.on_frame_inserted(index);
            self.sequence.on_frame_added(index);
            self.sequence.sort();
        }
    }

    #[inline]
    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    #[inline]
    pub fn store_mut(&mut self) -> &mut FrameStore {
        &mut self.store
    }

    #[inline]
    pub fn sequence(&self) -> &AnimationSequence {
        &self.sequence
    }

    /// Split borrow for readers that need both halves, such as playback.
    #[inline]
    pub fn parts(&self) -> (&FrameStore, &AnimationSequence) {
        (&self.store, &self.sequence)
    }
}
