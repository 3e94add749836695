//! Playback order, kept separate from storage order.

use crate::store::{shift_after_insertion, shift_after_removal};
use crate::FrameStore;

/// Ordered list of store indices that take part in playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationSequence {
    entries: Vec<usize>,
}

impl Default for AnimationSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationSequence {
    /// A sequence over the first real frame and the placeholder.
    pub fn new() -> Self {
        Self {
            entries: vec![0, 1],
        }
    }

    /// Reset to `[0, 1]`.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.extend([0, 1]);
    }

    /// Append a newly added frame.
    pub fn on_frame_added(&mut self, index: usize) {
        self.entries.push(index);
    }

    /// Drop `removed` and shift every later index down by one.
    pub fn on_frame_deleted(&mut self, removed: usize) {
        self.entries = self
            .entries
            .iter()
            .filter_map(|&i| shift_after_removal(i, removed))
            .collect();
    }

    /// Shift indices at or after `inserted` up by one.
    pub fn on_frame_inserted(&mut self, inserted: usize) {
        for entry in &mut self.entries {
            *entry = shift_after_insertion(*entry, inserted);
        }
    }

    /// Sort entries ascending.
    pub fn sort(&mut self) {
        self.entries.sort_unstable();
    }

    /// Store indices in playback order.
    ///
    /// The iterator is lazy and `Clone`, so it can be restarted at will.
    ///
    /// ```rust
    /// use minipixel_core::AnimationSequence;
    ///
    /// let sequence = AnimationSequence::new();
    /// let order = sequence.entries();
    /// assert_eq!(order.clone().collect::<Vec<_>>(), vec![0, 1]);
    /// assert_eq!(order.cycle().take(5).collect::<Vec<_>>(), vec![0, 1, 0, 1, 0]);
    /// ```
    pub fn entries(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.entries.iter().copied()
    }

    /// Entries that get a thumbnail: everything except the placeholder.
    pub fn thumbnail_entries<'a>(
        &'a self,
        store: &'a FrameStore,
    ) -> impl Iterator<Item = usize> + Clone + 'a {
        self.entries().filter(move |&i| !store.is_placeholder(i))
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.entries.get(position).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains(&index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.entries
    }
}
