//! The editor's API surface for its host UI.

use std::time::Duration;

use log::debug;

use crate::store::shift_after_removal;
use crate::{
    parse_color, AnimationSequence, EditorConfig, EditorError, EditorView, FrameDuration,
    FrameStore, Palette, PlaybackEngine, PlaybackEvent, Result, Rgb, Scheduler, Timeline, TimerId,
    VirtualClock,
};

/// One editing session: frames, palette, playback and the view they drive.
///
/// All state lives here; the host owns the session and forwards UI events
/// and fired timers to it.
///
/// ## Example
///
/// ```rust
/// use minipixel_core::{EditSession, EditorConfig, RecordingView, Rgb, VirtualClock};
///
/// let mut session = EditSession::new(&EditorConfig::default(), RecordingView::new(), VirtualClock::new());
/// session.select_color("#ff0000");
/// session.paint_at(0).unwrap();
/// assert_eq!(session.view().grid()[0], Rgb::new(255, 0, 0));
///
/// let second = session.add_frame();
/// assert_eq!(second, 1);
/// assert_eq!(session.sequence().as_slice(), &[0, 1]);
/// assert!(!session.store().has_placeholder());
/// ```
#[derive(Debug)]
pub struct EditSession<V, S> {
    timeline: Timeline,
    palette: Palette,
    playback: PlaybackEngine,
    visible: usize,
    selected_color: Rgb,
    frame_duration: FrameDuration,
    view: V,
    scheduler: S,
}

impl<V: EditorView, S: Scheduler> EditSession<V, S> {
    /// Create a session from configuration and initialize it.
    pub fn new(config: &EditorConfig, view: V, scheduler: S) -> Self {
        let mut palette = Palette::new();
        palette.add_default_colors(config.default_colors());
        let selected_color = config.selected_color();
        palette.select_color(selected_color);

        let mut session = Self {
            timeline: Timeline::new(),
            palette,
            playback: PlaybackEngine::new(),
            visible: 0,
            selected_color,
            frame_duration: config.frame_duration(),
            view,
            scheduler,
        };
        session.initialize();
        session
    }

    /// Reset to a single blank frame and show it.
    ///
    /// The palette and selected color are kept.
    pub fn initialize(&mut self) {
        self.playback.stop(&mut self.scheduler);
        self.timeline.initialize();
        self.visible = 0;
        self.refresh_thumbnails();
        self.load_visible();
        debug!("session initialized");
    }

    /// Set the paint color. Malformed input is ignored.
    pub fn select_color(&mut self, text: &str) {
        let Some(color) = parse_color(text) else {
            debug!("ignoring malformed color {text:?}");
            return;
        };
        self.selected_color = color;
        self.palette.select_color(color);
    }

    /// Select a palette swatch as the paint color.
    pub fn select_swatch(&mut self, index: usize) -> Result<Rgb> {
        let color = self.palette.select(index)?;
        self.selected_color = color;
        Ok(color)
    }

    /// Add a custom swatch from the color picker and paint with it.
    ///
    /// Returns `Ok(false)` if an equal swatch already exists.
    pub fn add_custom_color(&mut self, text: &str) -> Result<bool> {
        let added = self.palette.add_custom_color(text)?;
        if let Some(color) = self.palette.selected_color().filter(|_| added) {
            self.selected_color = color;
        }
        Ok(added)
    }

    /// Paint one pixel of the visible frame with the selected color.
    ///
    /// Rejected with `PlaybackActive` while the animation is playing.
    pub fn paint_at(&mut self, pos: usize) -> Result<()> {
        if self.playback.is_playing() {
            return Err(EditorError::PlaybackActive);
        }
        let color = self.selected_color;
        self.timeline
            .store_mut()
            .paint_pixel(self.visible, pos, color)?;

        self.view.render_pixel(pos, color);
        let frame = self.timeline.store().get_frame(self.visible)?;
        self.view.render_thumbnail(self.visible, frame);
        Ok(())
    }

    /// Load a frame into the grid, as when its thumbnail is clicked.
    pub fn set_visible_frame(&mut self, index: usize) -> Result<()> {
        let store = self.timeline.store();
        if index >= store.len() || store.is_placeholder(index) {
            return Err(EditorError::InvalidIndex {
                index,
                len: store.len(),
            });
        }
        self.visible = index;
        self.load_visible();
        Ok(())
    }

    /// Append a blank frame, make it visible and return its index.
    pub fn add_frame(&mut self) -> usize {
        let index = self.timeline.add_frame();
        self.visible = index;
        self.playback.clamp_to(self.timeline.sequence().len());
        self.refresh_thumbnails();
        self.load_visible();
        index
    }

    /// Delete the frame at a store index.
    ///
    /// If the visible frame is deleted, frame 0 becomes visible. A running
    /// animation keeps playing with its cursor clamped into the new sequence.
    pub fn delete_frame(&mut self, index: usize) -> Result<()> {
        self.timeline.delete_frame(index)?;
        self.visible = shift_after_removal(self.visible, index).unwrap_or(0);
        self.playback.clamp_to(self.timeline.sequence().len());
        self.refresh_thumbnails();
        self.load_visible();
        Ok(())
    }

    /// Delete by 1-based frame number as typed by the user.
    ///
    /// Returns the store index that was removed.
    pub fn delete_frame_number(&mut self, text: &str) -> Result<usize> {
        let store = self.timeline.store();
        let index = text
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|n| store.real_indices().nth(n))
            .ok_or_else(|| EditorError::InvalidFrameNumber(text.to_string()))?;
        self.delete_frame(index)?;
        Ok(index)
    }

    /// Ask the view which frame to delete, then delete it.
    ///
    /// Returns `Ok(None)` if the prompt was cancelled.
    pub fn delete_frame_prompted(&mut self) -> Result<Option<usize>> {
        let count = self.timeline.store().real_frame_count();
        if count <= 1 {
            return Err(EditorError::LastFrame);
        }
        match self.view.prompt_frame_number(count) {
            Some(text) => self.delete_frame_number(&text).map(Some),
            None => Ok(None),
        }
    }

    /// Start the animation.
    ///
    /// The duration typed into the view wins over the configured one.
    /// Returns `Ok(false)` if it was already playing.
    pub fn start_playback(&mut self) -> Result<bool> {
        let duration = self
            .view
            .read_frame_duration()
            .map(|raw| FrameDuration::from_input(&raw))
            .unwrap_or(self.frame_duration);
        self.playback
            .start(duration, self.timeline.sequence(), &mut self.scheduler)
    }

    /// Stop the animation and show the visible frame again.
    pub fn stop_playback(&mut self) {
        let was_playing = self.playback.is_playing();
        self.playback.stop(&mut self.scheduler);
        if was_playing {
            self.load_visible();
        }
    }

    /// Deliver a fired timer.
    pub fn on_timer(&mut self, id: TimerId) -> PlaybackEvent {
        let (store, sequence) = self.timeline.parts();
        self.playback
            .on_timer(id, store, sequence, &mut self.view, &mut self.scheduler)
    }

    fn refresh_thumbnails(&mut self) {
        self.view.clear_thumbnails();
        let (store, sequence) = self.timeline.parts();
        for index in sequence.thumbnail_entries(store) {
            if let Ok(frame) = store.get_frame(index) {
                self.view.render_thumbnail(index, frame);
            }
        }
    }

    fn load_visible(&mut self) {
        if let Ok(frame) = self.timeline.store().get_frame(self.visible) {
            self.view.load_frame(frame);
        }
        self.view.highlight_frame(self.visible);
    }

    pub fn set_frame_duration(&mut self, duration: FrameDuration) {
        self.frame_duration = duration;
    }

    #[inline]
    pub fn frame_duration(&self) -> FrameDuration {
        self.frame_duration
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[inline]
    pub fn store(&self) -> &FrameStore {
        self.timeline.store()
    }

    #[inline]
    pub fn sequence(&self) -> &AnimationSequence {
        self.timeline.sequence()
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn playback(&self) -> &PlaybackEngine {
        &self.playback
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    #[inline]
    pub fn visible_frame(&self) -> usize {
        self.visible
    }

    #[inline]
    pub fn selected_color(&self) -> Rgb {
        self.selected_color
    }

    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[inline]
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<V: EditorView> EditSession<V, VirtualClock> {
    /// Move virtual time forward, delivering every timer that falls due.
    pub fn advance(&mut self, delta: Duration) -> Vec<PlaybackEvent> {
        let until = self.scheduler.now() + delta;
        let mut events = Vec::new();
        while let Some(id) = self.scheduler.next_due(until) {
            events.push(self.on_timer(id));
        }
        events
    }
}
