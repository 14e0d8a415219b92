//! Configuration types for Arbor diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field is optional and falls back to its default.
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Spacing and root placement used by the layout engine.
//! - [`StyleConfig`] - Colors and fonts used by the SVG renderer.
//!
//! # Example
//!
//! ```
//! # use arbor::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     spacing = 16
//!
//!     [style]
//!     node_fill_color = "lightyellow"
//! "#).unwrap();
//!
//! assert_eq!(config.layout().spacing(), 16.0);
//! assert_eq!(config.layout().origin().x(), 40.0);
//! assert!(config.style().node_fill_color().is_ok());
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use arbor_core::{color::Color, geometry::Point};

use crate::{diagram::DEFAULT_ORIGIN, layout::SPACING};

/// A configuration that cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to parse configuration {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid {option} in config: {reason}")]
    Validation { option: &'static str, reason: String },
}

impl SettingsError {
    fn validation(option: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            option,
            reason: reason.into(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks the values serde cannot: ranges and finiteness.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Validation`] naming the first bad option.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.layout.validate()?;
        self.style.validate()
    }
}

/// Layout engine settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between a node and its children, and between siblings.
    spacing: f32,

    /// Horizontal position of the root node.
    origin_x: f32,

    /// Vertical position of the root node.
    origin_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: SPACING,
            origin_x: DEFAULT_ORIGIN.x(),
            origin_y: DEFAULT_ORIGIN.y(),
        }
    }
}

impl LayoutConfig {
    pub fn new(spacing: f32, origin: Point) -> Self {
        Self {
            spacing,
            origin_x: origin.x(),
            origin_y: origin.y(),
        }
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Where the root node is placed.
    pub fn origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        // Siblings stack downward only
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(SettingsError::validation(
                "spacing",
                format!("expected a non-negative number, found {}", self.spacing),
            ));
        }
        for (option, value) in [("origin_x", self.origin_x), ("origin_y", self.origin_y)] {
            if !value.is_finite() {
                return Err(SettingsError::validation(
                    option,
                    format!("expected a finite number, found {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// Visual styling for rendered diagrams.
///
/// Colors are kept as strings until they are used so that an invalid color
/// is reported when rendering, alongside the option it came from.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Canvas background; transparent when unset.
    #[serde(default)]
    background_color: Option<String>,

    /// Node box fill.
    #[serde(default)]
    node_fill_color: Option<String>,

    /// Node box outline.
    #[serde(default)]
    node_stroke_color: Option<String>,

    /// Label color.
    #[serde(default)]
    text_color: Option<String>,

    #[serde(default)]
    font_family: Option<String>,

    #[serde(default)]
    font_size: Option<u16>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_optional("background_color", self.background_color.as_deref())
    }

    /// Returns the node fill color, white by default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn node_fill_color(&self) -> Result<Color, String> {
        parse_or("node_fill_color", self.node_fill_color.as_deref(), "white")
    }

    /// Returns the node outline color, dark gray by default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn node_stroke_color(&self) -> Result<Color, String> {
        parse_or("node_stroke_color", self.node_stroke_color.as_deref(), "#555555")
    }

    /// Returns the label color, black by default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn text_color(&self) -> Result<Color, String> {
        parse_or("text_color", self.text_color.as_deref(), "black")
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_size(&self) -> Option<u16> {
        self.font_size
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.font_size == Some(0) {
            return Err(SettingsError::validation(
                "font_size",
                "expected a size of at least 1",
            ));
        }
        Ok(())
    }
}

fn parse_optional(option: &str, value: Option<&str>) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {option} in config: {err}"))
}

fn parse_or(option: &str, value: Option<&str>, default: &str) -> Result<Color, String> {
    Color::new(value.unwrap_or(default)).map_err(|err| format!("Invalid {option} in config: {err}"))
}
