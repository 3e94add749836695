//! 24-bit RGB colors and their text forms.

use std::fmt;
use std::str::FromStr;

use crate::EditorError;

/// A flat 24-bit RGB swatch color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgb(r, g, b)` form.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    #[inline]
    pub fn as_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).ok_or_else(|| EditorError::InvalidColor(s.to_string()))
    }
}

/// Parse a color string into an [`Rgb`].
///
/// Supports:
/// - Hex: `#RGB` (expanded to `#RRGGBB`), `#RRGGBB`, with or without the `#`
/// - Named colors: black, white, red, green, blue, yellow, cyan, magenta,
///   gray/grey, orange, purple, pink, brown
/// - Case-insensitive, trims whitespace
///
/// ```rust
/// use minipixel_core::{parse_color, Rgb};
///
/// assert_eq!(parse_color("#abc"), Some(Rgb::new(170, 187, 204)));
/// assert_eq!(parse_color("#aabbcc"), parse_color("#abc"));
/// assert_eq!(parse_color("nope"), None);
/// ```
pub fn parse_color(s: &str) -> Option<Rgb> {
    let s = s.trim();
    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => parse_named(s).or_else(|| parse_hex(s)),
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

fn parse_named(s: &str) -> Option<Rgb> {
    let (r, g, b) = match s.to_lowercase().as_str() {
        "black"         => (0, 0, 0),
        "white"         => (255, 255, 255),
        "red"           => (255, 0, 0),
        "green"         => (0, 128, 0),
        "blue"          => (0, 0, 255),
        "yellow"        => (255, 255, 0),
        "cyan"          => (0, 255, 255),
        "magenta"       => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "orange"        => (255, 165, 0),
        "purple"        => (128, 0, 128),
        "pink"          => (255, 192, 203),
        "brown"         => (139, 69, 19),
        _               => return None,
    };
    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(parse_color("black"),    Some(Rgb::new(0, 0, 0)));
        assert_eq!(parse_color("white"),    Some(Rgb::new(255, 255, 255)));
        assert_eq!(parse_color("orange"),   Some(Rgb::new(255, 165, 0)));
        assert_eq!(parse_color("grey"),     Some(Rgb::new(128, 128, 128)));
        assert_eq!(parse_color("Brown"),    Some(Rgb::new(139, 69, 19)));
    }

    #[test]
    fn hex_rrggbb() {
        assert_eq!(parse_color("#000000"), Some(Rgb::BLACK));
        assert_eq!(parse_color("#FFFFFF"), Some(Rgb::WHITE));
        assert_eq!(parse_color("#e9760a"), Some(Rgb::new(233, 118, 10)));
        assert_eq!(parse_color("  #ff0000  "), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn hex_rgb_shorthand() {
        assert_eq!(parse_color("#fff"), Some(Rgb::WHITE));
        assert_eq!(parse_color("#f00"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(parse_color("#abc"), Some(Rgb::new(170, 187, 204)));
    }

    #[test]
    fn hex_without_hash() {
        assert_eq!(parse_color("888888"), Some(Rgb::new(136, 136, 136)));
        assert_eq!(parse_color("0f0"), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn shorthand_and_full_forms_are_equal() {
        assert_eq!(parse_color("#0ff"), parse_color("#00FFFF"));
        assert_eq!(parse_color("cyan"), parse_color("#0ff"));
    }

    #[test]
    fn invalid_colors() {
        assert_eq!(parse_color(""),          None);
        assert_eq!(parse_color("notacolor"), None);
        assert_eq!(parse_color("#"),         None);
        assert_eq!(parse_color("#zz"),       None);
        assert_eq!(parse_color("#12345"),    None);
        assert_eq!(parse_color("#1234567"),  None);
        assert_eq!(parse_color("#+1+"),      None);
    }

    #[test]
    fn formatting() {
        let color = Rgb::new(233, 118, 10);
        assert_eq!(color.to_hex(), "#e9760a");
        assert_eq!(color.to_string(), "#e9760a");
        assert_eq!(color.css(), "rgb(233, 118, 10)");
    }

    #[test]
    fn from_str_reports_input() {
        let err = "bogus".parse::<Rgb>().unwrap_err();
        assert_eq!(err, EditorError::InvalidColor("bogus".into()));
        assert_eq!("#123".parse::<Rgb>(), Ok(Rgb::new(0x11, 0x22, 0x33)));
    }
}
