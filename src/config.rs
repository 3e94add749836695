use log::warn;

use crate::palette::DEFAULT_COLORS;
use crate::{parse_color, FrameDuration, Rgb};

/// Session settings, typically read from an `editor.toml` file.
///
/// All fields are optional; anything missing or invalid falls back to the
/// built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorConfig {
    pub frame_duration_ms: Option<i64>,
    pub palette: Option<Vec<String>>,
    pub selected_color: Option<String>,
}

impl EditorConfig {
    /// Parse an `editor.toml` string into `EditorConfig`.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Resolve the playback frame duration, clamping bad values to 500 ms.
    pub fn frame_duration(&self) -> FrameDuration {
        self.frame_duration_ms
            .map(FrameDuration::from_millis)
            .unwrap_or_default()
    }

    /// Resolve the default swatches.
    ///
    /// Unparsable entries are skipped. An absent palette yields
    /// [`DEFAULT_COLORS`].
    pub fn default_colors(&self) -> Vec<Rgb> {
        let mut colors = Vec::new();
        let entries: Vec<&str> = match &self.palette {
            Some(palette) => palette.iter().map(String::as_str).collect(),
            None => DEFAULT_COLORS.to_vec(),
        };
        for entry in entries {
            match parse_color(entry) {
                Some(color) if !colors.contains(&color) => colors.push(color),
                Some(_) => {}
                None => warn!("skipping invalid palette color {entry:?}"),
            }
        }
        colors
    }

    /// Resolve the initial paint color. Falls back to black.
    pub fn selected_color(&self) -> Rgb {
        self.selected_color
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Rgb::BLACK)
    }
}
