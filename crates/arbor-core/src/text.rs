//! Text measurement for node labels.
//!
//! - [`TextDefinition`] - Reusable font and padding configuration
//! - [`Text`] - Label content paired with a [`TextDefinition`]
//!
//! Measurement shapes the text with `cosmic-text` against the system fonts,
//! so the reported size follows real glyph advances rather than a per-character
//! estimate.
//!
//! ```
//! # use arbor_core::text::{Text, TextDefinition};
//! let mut style = TextDefinition::new();
//! style.set_font_size(14);
//!
//! let text = Text::new(&style, "in: kk.Logic");
//! assert_eq!(text.content(), "in: kk.Logic");
//! let _size = text.calculate_size();
//! ```

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{info, trace};

use crate::geometry::{Insets, Size};

/// Font and padding settings shared by every label of a diagram.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `13` |
/// | Padding | 4 vertical, 6 horizontal |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    padding: Insets,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the padding between the label and the edges of its box.
    ///
    /// Padding is part of the measured size.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: 13,
            padding: Insets::symmetric(4.0, 6.0),
        }
    }
}

/// A label string measured with a [`TextDefinition`].
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    pub fn content(&self) -> &str {
        self.content
    }

    /// Size of the label box: glyphs plus the definition's padding.
    pub fn calculate_size(&self) -> Size {
        self.calculate_size_without_padding()
            .add_padding(self.definition.padding())
    }

    /// Size of the glyphs alone.
    pub fn calculate_size_without_padding(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

/// Owns the shared [`FontSystem`]; loading fonts is expensive so it happens once.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() || text_def.font_size() == 0 {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Points to pixels at standard DPI
        let font_size_px = text_def.font_size() as f32 * 1.33;
        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(text_def.font_family()));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        let mut runs = 0;

        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
            runs += 1;
        }

        if runs == 0 || max_width == 0.0 {
            // No usable fonts; fall back to an average glyph advance
            let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * font_size_px * 0.55;
            total_height = total_height.max(metrics.line_height * text.lines().count().max(1) as f32);
        }

        trace!(text, width = max_width, height = total_height; "Measured text");
        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_family(), "sans-serif");
        assert_eq!(def.font_size(), 13);
        assert_approx_eq!(f32, def.padding().horizontal_sum(), 12.0);
        assert_approx_eq!(f32, def.padding().vertical_sum(), 8.0);
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_family("monospace");
        def.set_font_size(20);
        def.set_padding(Insets::uniform(0.0));

        assert_eq!(def.font_family(), "monospace");
        assert_eq!(def.font_size(), 20);
        assert_eq!(def.padding(), Insets::default());
    }

    #[test]
    fn test_empty_text_measures_padding_only() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").calculate_size();
        assert_approx_eq!(f32, size.width(), 12.0);
        assert_approx_eq!(f32, size.height(), 8.0);
    }

    #[test]
    fn test_text_has_positive_size() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "in: kk.Logic").calculate_size_without_padding();
        assert!(size.width() > 0.0);
        assert!(size.height() > 0.0);
    }

    #[test]
    fn test_padding_added_exactly() {
        let mut bare = TextDefinition::new();
        bare.set_padding(Insets::uniform(0.0));
        let mut padded = TextDefinition::new();
        padded.set_padding(Insets::uniform(10.0));

        let bare_size = Text::new(&bare, "Label").calculate_size();
        let padded_size = Text::new(&padded, "Label").calculate_size();

        assert_approx_eq!(f32, padded_size.width() - bare_size.width(), 20.0, epsilon = 0.001);
        assert_approx_eq!(f32, padded_size.height() - bare_size.height(), 20.0, epsilon = 0.001);
    }

    #[test]
    fn test_zero_font_size_measures_nothing() {
        let mut def = TextDefinition::new();
        def.set_font_size(0);
        def.set_padding(Insets::uniform(0.0));
        assert_eq!(Text::new(&def, "Label").calculate_size(), Size::default());
    }

    #[test]
    fn test_multiline_is_taller() {
        let def = TextDefinition::new();
        let single = Text::new(&def, "one").calculate_size();
        let multi = Text::new(&def, "one\ntwo\nthree").calculate_size();
        assert!(multi.height() > single.height());
    }
}
