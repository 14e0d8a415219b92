//! CSS colors for SVG output.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A CSS color such as `"#fffbe6"`, `"rgb(85, 85, 85)"` or `"navy"`.
///
/// ```
/// use arbor_core::color::Color;
///
/// let fill = Color::new("#f5f5f5").unwrap();
/// assert_eq!(fill.alpha(), 1.0);
/// assert!(Color::new("not-a-color").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color(DynamicColor);

impl Color {
    /// Parses a CSS color string.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected input.
    pub fn new(css: &str) -> Result<Self, String> {
        DynamicColor::from_str(css)
            .map(Self)
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }

    /// Opacity between 0.0 and 1.0, emitted separately as `*-opacity`.
    pub fn alpha(&self) -> f32 {
        self.0.components[3]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_colors() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("rgb(10, 20, 30)").is_ok());
        assert!(Color::new("lightyellow").is_ok());
    }

    #[test]
    fn test_error_names_input() {
        let err = Color::new("bogus").unwrap_err();
        assert!(err.contains("`bogus`"), "unexpected message: {err}");
    }

    #[test]
    fn test_translucent_alpha() {
        let color = Color::new("rgba(0, 0, 0, 0.5)").unwrap();
        assert!((color.alpha() - 0.5).abs() < 0.001);
        assert!(!color.to_string().is_empty());
    }
}
