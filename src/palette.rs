//! Swatch palette: a fixed default prefix followed by custom colors.

use log::debug;

use crate::{EditorError, Result, Rgb};

/// Swatches shown when no palette is configured.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#000000", "#ffffff", "#e9760a", "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#00ffff",
    "#ff00ff", "#888888",
];

/// Ordered, duplicate-free list of swatches.
///
/// Colors are compared as normalized RGB triples, so `#fff`, `#FFFFFF` and
/// `white` are the same swatch.
///
/// ```rust
/// use minipixel_core::{Palette, Rgb};
///
/// let mut palette = Palette::new();
/// palette.add_default_colors([Rgb::BLACK, Rgb::WHITE]);
///
/// assert_eq!(palette.add_custom_color("#f00"), Ok(true));
/// assert_eq!(palette.add_custom_color("#FF0000"), Ok(false));
/// assert_eq!(palette.add_custom_color("#00f"), Ok(true));
///
/// // Newest custom color comes first, right after the defaults.
/// assert_eq!(palette.swatches()[2], Rgb::new(0, 0, 255));
/// assert_eq!(palette.selected_color(), Some(Rgb::new(0, 0, 255)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    swatches: Vec<Rgb>,
    default_count: usize,
    selected: Option<usize>,
}

impl Palette {
    /// An empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// A palette seeded with [`DEFAULT_COLORS`], black selected.
    pub fn with_defaults() -> Self {
        let mut palette = Self::new();
        palette.add_default_colors(DEFAULT_COLORS.iter().filter_map(|c| crate::parse_color(c)));
        palette.selected = Some(0);
        palette
    }

    /// Append default swatches in order. Duplicates are skipped.
    ///
    /// Defaults always stay ahead of custom colors.
    pub fn add_default_colors<I: IntoIterator<Item = Rgb>>(&mut self, colors: I) {
        for color in colors {
            if self.position(color).is_some() {
                continue;
            }
            self.swatches.insert(self.default_count, color);
            if let Some(selected) = self.selected.as_mut() {
                if *selected >= self.default_count {
                    *selected += 1;
                }
            }
            self.default_count += 1;
        }
    }

    /// Insert a custom color right after the defaults and select it.
    ///
    /// Returns `Ok(false)` when an equal color is already present.
    pub fn add_custom_color(&mut self, text: &str) -> Result<bool> {
        let color: Rgb = text.parse()?;
        if self.position(color).is_some() {
            return Ok(false);
        }
        self.swatches.insert(self.default_count, color);
        self.selected = Some(self.default_count);
        debug!("added custom color {color}");
        Ok(true)
    }

    /// Select the swatch at `index`.
    pub fn select(&mut self, index: usize) -> Result<Rgb> {
        let color = self.swatches.get(index).copied().ok_or(EditorError::InvalidIndex {
            index,
            len: self.swatches.len(),
        })?;
        self.selected = Some(index);
        Ok(color)
    }

    /// Select the swatch equal to `color`, or clear the selection if none is.
    pub fn select_color(&mut self, color: Rgb) -> Option<usize> {
        self.selected = self.position(color);
        self.selected
    }

    /// Index of the swatch equal to `color`.
    pub fn position(&self, color: Rgb) -> Option<usize> {
        self.swatches.iter().position(|&c| c == color)
    }

    #[inline]
    pub fn swatches(&self) -> &[Rgb] {
        &self.swatches
    }

    #[inline]
    pub fn default_count(&self) -> usize {
        self.default_count
    }

    /// Custom colors, newest first.
    #[inline]
    pub fn custom_colors(&self) -> &[Rgb] {
        &self.swatches[self.default_count..]
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_color(&self) -> Option<Rgb> {
        self.selected.and_then(|i| self.swatches.get(i).copied())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}
