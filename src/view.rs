//! Display capabilities the editor core calls into.

use std::collections::{BTreeMap, VecDeque};

use crate::{PixelBuffer, Rgb, PIXEL_COUNT};

/// The visible 16x16 editing grid.
pub trait GridRenderer {
    /// Paint one grid cell.
    fn render_pixel(&mut self, pos: usize, color: Rgb);

    /// Repaint the whole grid from a frame.
    fn load_frame(&mut self, frame: &PixelBuffer) {
        for (pos, &color) in frame.pixels().iter().enumerate() {
            self.render_pixel(pos, color);
        }
    }
}

/// Everything the host UI provides to an editing session.
pub trait EditorView: GridRenderer {
    /// Remove every thumbnail from the frame list.
    fn clear_thumbnails(&mut self);

    /// Draw or refresh the thumbnail for a store index.
    fn render_thumbnail(&mut self, index: usize, frame: &PixelBuffer);

    /// Mark a thumbnail as the visible frame.
    fn highlight_frame(&mut self, index: usize);

    /// Ask the user for a 1-based frame number between 1 and `max`.
    ///
    /// Returns None when the prompt was cancelled.
    fn prompt_frame_number(&mut self, max: usize) -> Option<String>;

    /// Raw frame duration entered in the UI, if the host has such a field.
    fn read_frame_duration(&mut self) -> Option<String> {
        None
    }
}

/// In-memory [`EditorView`] that records what would be on screen.
///
/// ```rust
/// use minipixel_core::{GridRenderer, PixelBuffer, RecordingView, Rgb};
///
/// let mut view = RecordingView::new();
/// view.load_frame(&PixelBuffer::filled(Rgb::BLACK));
/// assert!(view.grid().iter().all(|&c| c == Rgb::BLACK));
/// ```
#[derive(Clone, Debug)]
pub struct RecordingView {
    grid: Vec<Rgb>,
    thumbnails: BTreeMap<usize, PixelBuffer>,
    thumbnail_order: Vec<usize>,
    highlighted: Option<usize>,
    answers: VecDeque<Option<String>>,
    frame_duration: Option<String>,
    pixel_writes: usize,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            grid: vec![Rgb::WHITE; PIXEL_COUNT],
            thumbnails: BTreeMap::new(),
            thumbnail_order: Vec::new(),
            highlighted: None,
            answers: VecDeque::new(),
            frame_duration: None,
            pixel_writes: 0,
        }
    }

    /// Queue an answer for the next frame-number prompt.
    pub fn push_prompt_answer(&mut self, answer: Option<&str>) {
        self.answers.push_back(answer.map(str::to_string));
    }

    /// Set the value returned by `read_frame_duration`.
    pub fn set_frame_duration(&mut self, raw: Option<&str>) {
        self.frame_duration = raw.map(str::to_string);
    }

    /// Current grid contents.
    pub fn grid(&self) -> &[Rgb] {
        &self.grid
    }

    /// Thumbnail store indices in the order they were listed.
    pub fn thumbnail_order(&self) -> &[usize] {
        &self.thumbnail_order
    }

    pub fn thumbnail(&self, index: usize) -> Option<&PixelBuffer> {
        self.thumbnails.get(&index)
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Total number of single-cell writes so far.
    pub fn pixel_writes(&self) -> usize {
        self.pixel_writes
    }
}

impl GridRenderer for RecordingView {
    fn render_pixel(&mut self, pos: usize, color: Rgb) {
        if let Some(cell) = self.grid.get_mut(pos) {
            *cell = color;
            self.pixel_writes += 1;
        }
    }
}

impl EditorView for RecordingView {
    fn clear_thumbnails(&mut self) {
        self.thumbnails.clear();
        self.thumbnail_order.clear();
    }

    fn render_thumbnail(&mut self, index: usize, frame: &PixelBuffer) {
        if self.thumbnails.insert(index, frame.clone()).is_none() {
            self.thumbnail_order.push(index);
        }
    }

    fn highlight_frame(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    fn prompt_frame_number(&mut self, _max: usize) -> Option<String> {
        self.answers.pop_front().flatten()
    }

    fn read_frame_duration(&mut self) -> Option<String> {
        self.frame_duration.clone()
    }
}
