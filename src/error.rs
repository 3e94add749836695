//! Error type shared by every editor operation.

/// Errors produced by frame, palette and playback operations.
///
/// Every operation that returns one of these leaves the editor state exactly
/// as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("Frame index {index} is out of range ({len} frames)")]
    InvalidIndex { index: usize, len: usize },
    #[error("Pixel position {position} is outside the 16x16 grid")]
    InvalidPixelPosition { position: usize },
    #[error("Cannot delete the only remaining frame!")]
    LastFrame,
    #[error("Invalid frame duration: {0:?}")]
    InvalidDurationConfig(String),
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Invalid frame number")]
    InvalidFrameNumber(String),
    #[error("Editing is disabled while the animation is playing")]
    PlaybackActive,
    #[error("Animation sequence is empty")]
    EmptySequence,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EditorError>;
