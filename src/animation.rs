//! Timed playback of the animation sequence.

use std::time::Duration;

use log::{debug, trace, warn};

use crate::{
    AnimationSequence, EditorError, FrameStore, GridRenderer, Result, Scheduler, TimerId,
    PIXEL_COUNT,
};

/// Time each frame takes to reveal, and the hold after it.
///
/// Values that are missing, non-numeric or below [`FrameDuration::MIN_MS`]
/// fall back to [`FrameDuration::DEFAULT_MS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameDuration {
    millis: u32,
}

impl Default for FrameDuration {
    fn default() -> Self {
        Self {
            millis: Self::DEFAULT_MS,
        }
    }
}

impl FrameDuration {
    pub const DEFAULT_MS: u32 = 500;
    pub const MIN_MS: u32 = 100;

    /// Validate a duration in milliseconds.
    pub fn try_from_millis(millis: i64) -> Result<Self> {
        if millis < i64::from(Self::MIN_MS) {
            return Err(EditorError::InvalidDurationConfig(millis.to_string()));
        }
        let millis = u32::try_from(millis)
            .map_err(|_| EditorError::InvalidDurationConfig(millis.to_string()))?;
        Ok(Self { millis })
    }

    /// Parse a text field. Leading digits are read, as in `"250ms"`.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let sign_len = usize::from(trimmed.starts_with(['-', '+']));
        let digits_end = trimmed[sign_len..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(trimmed.len(), |i| i + sign_len);
        let millis = trimmed[..digits_end]
            .parse::<i64>()
            .map_err(|_| EditorError::InvalidDurationConfig(raw.to_string()))?;
        Self::try_from_millis(millis)
    }

    /// Like [`FrameDuration::try_from_millis`], clamping bad values to the default.
    pub fn from_millis(millis: i64) -> Self {
        Self::try_from_millis(millis).unwrap_or_else(|err| {
            warn!("{err}; using {} ms", Self::DEFAULT_MS);
            Self::default()
        })
    }

    /// Like [`FrameDuration::parse`], clamping bad input to the default.
    pub fn from_input(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|err| {
            warn!("{err}; using {} ms", Self::DEFAULT_MS);
            Self::default()
        })
    }

    #[inline]
    pub fn millis(&self) -> u32 {
        self.millis
    }

    /// Hold after a frame has been fully revealed.
    #[inline]
    pub fn hold(&self) -> Duration {
        Duration::from_millis(u64::from(self.millis))
    }

    /// Delay between two revealed pixels: `duration / 256`.
    #[inline]
    pub fn pixel_interval(&self) -> Duration {
        Duration::from_nanos(u64::from(self.millis) * 1_000_000 / PIXEL_COUNT as u64)
    }
}

/// Current state of playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// Which timer the engine is waiting on while playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Repeating per-pixel reveal ticks
    #[default]
    Revealing,
    /// One-shot hold between two frames
    Holding,
}

/// Position of the reveal within the sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub sequence_position: usize,
    pub pixel_position: usize,
}

/// What a delivered timer did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The timer was stale, foreign, or playback is stopped
    Ignored,
    /// One pixel was pushed to the grid
    Revealed { frame: usize, pixel: usize },
    /// The last pixel of a frame was revealed and the hold is armed
    FrameCompleted { next_position: usize },
    /// The hold elapsed and reveal ticks resumed
    Resumed,
    /// A frame could not be read and playback stopped
    Aborted,
}

/// Two-level playback state machine.
///
/// While playing, a repeating timer reveals the current frame one pixel per
/// tick. After the last pixel the engine swaps to a one-shot hold of the full
/// frame duration, then advances to the next sequence entry and starts
/// revealing again, looping until stopped.
///
/// Exactly one timer is armed at a time. It is always cancelled before
/// another is armed, and any other id delivered to [`PlaybackEngine::on_timer`]
/// is ignored.
///
/// ## Example
///
/// ```rust
/// use minipixel_core::{
///     FrameDuration, PlaybackEngine, PlaybackEvent, PlaybackState, RecordingView, Timeline,
///     VirtualClock,
/// };
///
/// let timeline = Timeline::new();
/// let (store, sequence) = timeline.parts();
/// let mut clock = VirtualClock::new();
/// let mut view = RecordingView::new();
/// let mut engine = PlaybackEngine::new();
///
/// engine.start(FrameDuration::default(), sequence, &mut clock).unwrap();
/// assert_eq!(engine.state(), PlaybackState::Playing);
///
/// let tick = clock.next_due(FrameDuration::default().hold()).unwrap();
/// let event = engine.on_timer(tick, store, sequence, &mut view, &mut clock);
/// assert_eq!(event, PlaybackEvent::Revealed { frame: 0, pixel: 0 });
///
/// engine.stop(&mut clock);
/// assert_eq!(clock.pending(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlaybackEngine {
    state: PlaybackState,
    phase: PlaybackPhase,
    cursor: Cursor,
    duration: FrameDuration,
    armed: Option<TimerId>,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playback from the first sequence entry.
    ///
    /// Returns `Ok(false)` without touching anything if already playing.
    pub fn start<S: Scheduler>(
        &mut self,
        duration: FrameDuration,
        sequence: &AnimationSequence,
        scheduler: &mut S,
    ) -> Result<bool> {
        if self.is_playing() {
            return Ok(false);
        }
        if sequence.is_empty() {
            return Err(EditorError::EmptySequence);
        }

        self.disarm(scheduler);
        self.state = PlaybackState::Playing;
        self.phase = PlaybackPhase::Revealing;
        self.cursor = Cursor::default();
        self.duration = duration;
        self.armed = Some(scheduler.schedule_repeating(duration.pixel_interval()));
        debug!(
            "playback started: {} ms per frame over {} entries",
            duration.millis(),
            sequence.len()
        );
        Ok(true)
    }

    /// Stop playback and cancel the armed timer.
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.disarm(scheduler);
        if self.state == PlaybackState::Playing {
            debug!("playback stopped at {:?}", self.cursor);
        }
        self.state = PlaybackState::Stopped;
        self.phase = PlaybackPhase::Revealing;
    }

    /// Handle a fired timer.
    pub fn on_timer<R: GridRenderer, S: Scheduler>(
        &mut self,
        id: TimerId,
        store: &FrameStore,
        sequence: &AnimationSequence,
        renderer: &mut R,
        scheduler: &mut S,
    ) -> PlaybackEvent {
        if !self.is_playing() || self.armed != Some(id) {
            trace!("ignoring stale timer {id:?}");
            return PlaybackEvent::Ignored;
        }

        match self.phase {
            PlaybackPhase::Revealing => self.reveal(store, sequence, renderer, scheduler),
            PlaybackPhase::Holding => {
                self.disarm(scheduler);
                self.phase = PlaybackPhase::Revealing;
                self.armed = Some(scheduler.schedule_repeating(self.duration.pixel_interval()));
                PlaybackEvent::Resumed
            }
        }
    }

    fn reveal<R: GridRenderer, S: Scheduler>(
        &mut self,
        store: &FrameStore,
        sequence: &AnimationSequence,
        renderer: &mut R,
        scheduler: &mut S,
    ) -> PlaybackEvent {
        let Cursor {
            sequence_position,
            pixel_position,
        } = self.cursor;

        let color = sequence
            .get(sequence_position)
            .and_then(|frame| store.get_frame(frame).ok().map(|buffer| (frame, buffer)))
            .and_then(|(frame, buffer)| buffer.pixel(pixel_position).map(|c| (frame, c)));
        let Some((frame, color)) = color else {
            warn!("playback cursor {:?} does not resolve to a frame", self.cursor);
            self.stop(scheduler);
            return PlaybackEvent::Aborted;
        };

        renderer.render_pixel(pixel_position, color);
        trace!("revealed pixel {pixel_position} of frame {frame}");

        if pixel_position + 1 < PIXEL_COUNT {
            self.cursor.pixel_position += 1;
            return PlaybackEvent::Revealed {
                frame,
                pixel: pixel_position,
            };
        }

        let next_position = (sequence_position + 1) % sequence.len();
        self.cursor = Cursor {
            sequence_position: next_position,
            pixel_position: 0,
        };
        self.disarm(scheduler);
        self.phase = PlaybackPhase::Holding;
        self.armed = Some(scheduler.schedule_after(self.duration.hold()));
        debug!("frame {frame} revealed; holding before entry {next_position}");
        PlaybackEvent::FrameCompleted { next_position }
    }

    /// Keep the cursor inside a sequence that just changed length.
    pub fn clamp_to(&mut self, sequence_len: usize) {
        if sequence_len > 0 && self.cursor.sequence_position >= sequence_len {
            debug!(
                "clamping playback position {} to {}",
                self.cursor.sequence_position,
                sequence_len - 1
            );
            self.cursor.sequence_position = sequence_len - 1;
        }
    }

    fn disarm<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.armed.take() {
            scheduler.cancel(id);
        }
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    #[inline]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Duration used by the current or most recent run.
    #[inline]
    pub fn duration(&self) -> FrameDuration {
        self.duration
    }

    /// The single timer playback is waiting on, if any.
    #[inline]
    pub fn armed_timer(&self) -> Option<TimerId> {
        self.armed
    }
}
