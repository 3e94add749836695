//! # minipixel-core
//!
//! Frame and animation core for a 16x16 sprite animator.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Storing frames as fixed 256-pixel RGB buffers
//! - Keeping a playback order separate from storage order, including the
//!   hidden blank frame that keeps a one-frame animation cycling
//! - Playing the animation back pixel by pixel with a hold between frames
//! - Routing paint, palette and frame actions from a host UI
//!
//! Drawing and timers are supplied by the host through [`EditorView`] and
//! [`Scheduler`]. [`RecordingView`] and [`VirtualClock`] implement both
//! in memory for headless use and tests.
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load [`EditorConfig`] from TOML
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use minipixel_core::{EditSession, EditorConfig, RecordingView, Rgb, VirtualClock};
//!
//! let config = EditorConfig {
//!     frame_duration_ms: Some(200),
//!     ..Default::default()
//! };
//! let mut session = EditSession::new(&config, RecordingView::new(), VirtualClock::new());
//!
//! // Paint the first frame, then add a second one
//! session.select_color("#e9760a");
//! session.paint_at(0).unwrap();
//! session.add_frame();
//!
//! // Play back: after 200 ms the first frame is fully revealed
//! session.start_playback().unwrap();
//! session.advance(Duration::from_millis(200));
//! assert_eq!(session.view().grid()[0], Rgb::new(233, 118, 10));
//!
//! session.stop_playback();
//! ```

mod animation;
mod color;
mod config;
mod data;
mod error;
mod palette;
pub mod render;
mod sequence;
mod session;
mod store;
mod timeline;
mod timer;
mod view;

pub use animation::{
    Cursor, FrameDuration, PlaybackEngine, PlaybackEvent, PlaybackPhase, PlaybackState,
};
pub use color::{parse_color, Rgb};
pub use config::EditorConfig;
pub use data::{PixelBuffer, GRID_HEIGHT, GRID_WIDTH, PIXEL_COUNT};
pub use error::{EditorError, Result};
pub use palette::{Palette, DEFAULT_COLORS};
pub use sequence::AnimationSequence;
pub use session::EditSession;
pub use store::{shift_after_insertion, shift_after_removal, FrameStore, PLACEHOLDER_INDEX};
pub use timeline::Timeline;
pub use timer::{Scheduler, TimerId, VirtualClock};
pub use view::{EditorView, GridRenderer, RecordingView};
