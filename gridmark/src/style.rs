// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line styles for gridlines and borders.
//!
//! Scale options carry *partial* styles ([`LineStyleOptions`]): any field may be left unset.
//! A draw pass turns each partial style into a complete [`TickStyle`] with [`resolve_style`],
//! filling the gaps from a [`GridDefaults`] configuration that is passed in explicitly.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Stroke;
use peniko::color::Srgb;
use peniko::color::palette::css;
use peniko::{Brush, Color};
use smallvec::SmallVec;

/// A dash pattern: alternating on/off lengths in scene coordinates.
///
/// An empty pattern means a solid line.
pub type Dashes = SmallVec<[f64; 4]>;

/// A fully resolved line style for one gridline or border stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct TickStyle {
    /// Stroke width in scene coordinates.
    pub line_width: f64,
    /// Stroke color.
    pub color: Color,
    /// Dash pattern (empty for solid).
    pub dash: Dashes,
    /// Offset into the dash pattern.
    pub dash_offset: f64,
}

impl TickStyle {
    /// Convenience for a solid line.
    pub fn solid(color: Color, line_width: f64) -> Self {
        Self {
            line_width,
            color,
            dash: Dashes::new(),
            dash_offset: 0.0,
        }
    }

    /// Sets the dash pattern and dash offset.
    pub fn with_dash(mut self, pattern: impl IntoIterator<Item = f64>, offset: f64) -> Self {
        self.dash = pattern.into_iter().collect();
        self.dash_offset = offset;
        self
    }

    /// Returns the `kurbo` stroke parameters for this style.
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.line_width).with_dashes(self.dash_offset, self.dash.iter().copied())
    }

    /// Returns the stroke paint for this style.
    pub fn brush(&self) -> Brush {
        Brush::Solid(self.color)
    }

    /// Half-pixel offset that puts a line of this width on crisp pixel boundaries.
    ///
    /// Lines with an even width already cover whole pixels when centered on an integer
    /// coordinate; everything else is shifted by half a pixel.
    pub fn pixel_alignment(&self) -> f64 {
        if self.line_width % 2.0 == 0.0 { 0.0 } else { 0.5 }
    }
}

impl Default for TickStyle {
    fn default() -> Self {
        Self::solid(css::BLACK.with_alpha(0.1), 1.0)
    }
}

/// A partial line style, as authored in scale options.
///
/// Unset fields are filled in by [`resolve_style`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineStyleOptions {
    /// Stroke width.
    pub line_width: Option<f64>,
    /// Stroke color.
    pub color: Option<Color>,
    /// Dash pattern.
    pub border_dash: Option<Dashes>,
    /// Offset into the dash pattern.
    pub border_dash_offset: Option<f64>,
}

impl LineStyleOptions {
    /// Sets the stroke width.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the dash pattern and offset.
    pub fn with_dash(mut self, pattern: impl IntoIterator<Item = f64>, offset: f64) -> Self {
        self.border_dash = Some(pattern.into_iter().collect());
        self.border_dash_offset = Some(offset);
        self
    }
}

/// Fills every unset field of `options` from `fallback`.
///
/// This is the single place where authored options meet global defaults. It has no side
/// effects, so calling it once per segment is cheap to reason about.
pub fn resolve_style(options: &LineStyleOptions, fallback: &TickStyle) -> TickStyle {
    TickStyle {
        line_width: options.line_width.unwrap_or(fallback.line_width),
        color: options.color.unwrap_or(fallback.color),
        dash: options
            .border_dash
            .clone()
            .unwrap_or_else(|| fallback.dash.clone()),
        dash_offset: options.border_dash_offset.unwrap_or(fallback.dash_offset),
    }
}

/// Global fallback styles used when scale options leave a field unset.
///
/// A host usually keeps one of these per chart (or per application) and hands it to each draw
/// pass. Nothing here is global mutable state.
#[derive(Clone, Debug, PartialEq)]
pub struct GridDefaults {
    /// Fallback for regular gridlines, and for undefined borders of an orientation that no
    /// scale claimed.
    pub grid: TickStyle,
    /// Fallback for zero-line gridlines.
    pub zero_line: TickStyle,
    /// Fallback for scale borders.
    pub border: TickStyle,
}

impl GridDefaults {
    /// Sets the gridline fallback.
    pub fn with_grid(mut self, grid: TickStyle) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the zero-line fallback.
    pub fn with_zero_line(mut self, zero_line: TickStyle) -> Self {
        self.zero_line = zero_line;
        self
    }

    /// Sets the border fallback.
    pub fn with_border(mut self, border: TickStyle) -> Self {
        self.border = border;
        self
    }
}

impl Default for GridDefaults {
    fn default() -> Self {
        Self {
            grid: TickStyle::solid(css::BLACK.with_alpha(0.1), 1.0),
            zero_line: TickStyle::solid(css::BLACK.with_alpha(0.25), 1.0),
            border: TickStyle::solid(css::BLACK.with_alpha(0.4), 1.0),
        }
    }
}

/// A value that is either shared by every tick or given per tick index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum PerIndex<T> {
    /// One value for every tick.
    Uniform(T),
    /// One value per tick index. Indices past the end have no value.
    PerTick(Vec<T>),
}

impl<T> PerIndex<T> {
    /// Returns the value for tick `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            Self::Uniform(v) => Some(v),
            Self::PerTick(values) => values.get(index),
        }
    }
}

impl<T> From<T> for PerIndex<T> {
    fn from(value: T) -> Self {
        Self::Uniform(value)
    }
}

impl<T> From<Vec<T>> for PerIndex<T> {
    fn from(values: Vec<T>) -> Self {
        Self::PerTick(values)
    }
}

/// Errors produced while reading style values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The string is not a CSS color that `peniko` understands.
    #[error("invalid CSS color `{0}`")]
    InvalidColor(String),
}

/// Parses a CSS color string such as `"rgba(0, 0, 0, 0.4)"`, `"#336699"` or `"steelblue"`.
pub fn parse_color(s: &str) -> Result<Color, StyleError> {
    peniko::color::parse_color(s)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| StyleError::InvalidColor(s.to_string()))
}
