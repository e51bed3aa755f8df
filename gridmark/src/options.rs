// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-scale gridline and border options.
//!
//! Field names follow the option keys charting front ends commonly expose (`lineWidth`,
//! `borderDash`, `zeroLineColor`, `offsetGridLines`, ...). With the `serde` feature enabled the
//! option structs deserialize from that camelCase shape, with colors given as CSS strings.

use peniko::Color;

use crate::style::{Dashes, GridDefaults, LineStyleOptions, PerIndex, TickStyle, resolve_style};

/// The kind of scale, as far as gridline rendering cares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(rename_all = "camelCase"))]
pub enum ScaleKind {
    /// Continuous linear scale.
    #[default]
    Linear,
    /// Continuous logarithmic scale.
    Logarithmic,
    /// Discrete category scale.
    Category,
    /// Time scale.
    Time,
    /// Radial (polar/radar) linear scale. Charts whose primary scale is radial get no
    /// gridlines from this crate.
    RadialLinear,
}

impl ScaleKind {
    /// Returns `true` for non-orthogonal scales.
    pub fn is_radial(self) -> bool {
        matches!(self, Self::RadialLinear)
    }
}

/// Gridline options for one scale.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct GridLineOptions {
    /// Whether this scale draws gridlines (and contributes undefined border candidates).
    pub display: bool,
    /// Gridline color, uniform or per tick index.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "serde_css::per_index_color")
    )]
    pub color: Option<PerIndex<Color>>,
    /// Gridline width, uniform or per tick index.
    pub line_width: Option<PerIndex<f64>>,
    /// Gridline dash pattern.
    pub border_dash: Option<Dashes>,
    /// Gridline dash offset.
    pub border_dash_offset: Option<f64>,
    /// Width of the zero line.
    pub zero_line_width: Option<f64>,
    /// Color of the zero line.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "serde_css::color"))]
    pub zero_line_color: Option<Color>,
    /// Dash pattern of the zero line.
    pub zero_line_border_dash: Option<Dashes>,
    /// Dash offset of the zero line.
    pub zero_line_border_dash_offset: Option<f64>,
    /// Tick index that receives the zero-line style.
    ///
    /// When unset, the scale decides (see [`GridScale::zero_line_index`]), and index 0 is used
    /// if the scale has no opinion either.
    ///
    /// [`GridScale::zero_line_index`]: crate::GridScale::zero_line_index
    pub zero_line_index: Option<usize>,
    /// Draw gridlines between ticks instead of on them.
    ///
    /// Ticks then mark category midpoints, so there is one more gridline than ticks.
    pub offset_grid_lines: bool,
}

impl Default for GridLineOptions {
    fn default() -> Self {
        Self {
            display: true,
            color: None,
            line_width: None,
            border_dash: None,
            border_dash_offset: None,
            zero_line_width: None,
            zero_line_color: None,
            zero_line_border_dash: None,
            zero_line_border_dash_offset: None,
            zero_line_index: None,
            offset_grid_lines: false,
        }
    }
}

impl GridLineOptions {
    /// Enables or disables gridlines.
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// Sets the gridline color (uniform, or a `Vec` for per-tick colors).
    pub fn with_color(mut self, color: impl Into<PerIndex<Color>>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the gridline width (uniform, or a `Vec` for per-tick widths).
    pub fn with_line_width(mut self, line_width: impl Into<PerIndex<f64>>) -> Self {
        self.line_width = Some(line_width.into());
        self
    }

    /// Sets the gridline dash pattern and offset.
    pub fn with_dash(mut self, pattern: impl IntoIterator<Item = f64>, offset: f64) -> Self {
        self.border_dash = Some(pattern.into_iter().collect());
        self.border_dash_offset = Some(offset);
        self
    }

    /// Sets every zero-line field from a complete style.
    pub fn with_zero_line(mut self, style: TickStyle) -> Self {
        self.zero_line_width = Some(style.line_width);
        self.zero_line_color = Some(style.color);
        self.zero_line_border_dash = Some(style.dash);
        self.zero_line_border_dash_offset = Some(style.dash_offset);
        self
    }

    /// Pins the zero line to a tick index.
    pub fn with_zero_line_index(mut self, index: usize) -> Self {
        self.zero_line_index = Some(index);
        self
    }

    /// Enables or disables offset gridlines.
    pub fn with_offset_grid_lines(mut self, offset: bool) -> Self {
        self.offset_grid_lines = offset;
        self
    }

    /// The partial style authored for tick `index` (regular gridline, not the zero line).
    pub fn tick_style_options(&self, index: usize) -> LineStyleOptions {
        LineStyleOptions {
            line_width: self.line_width.as_ref().and_then(|w| w.get(index)).copied(),
            color: self.color.as_ref().and_then(|c| c.get(index)).copied(),
            border_dash: self.border_dash.clone(),
            border_dash_offset: self.border_dash_offset,
        }
    }

    /// The partial style authored for the zero line.
    pub fn zero_line_style_options(&self) -> LineStyleOptions {
        LineStyleOptions {
            line_width: self.zero_line_width,
            color: self.zero_line_color,
            border_dash: self.zero_line_border_dash.clone(),
            border_dash_offset: self.zero_line_border_dash_offset,
        }
    }

    /// Resolves the style of gridline `index`.
    ///
    /// `is_zero_line` selects the zero-line fields and fallback instead of the regular ones.
    pub fn resolve_tick_style(
        &self,
        index: usize,
        is_zero_line: bool,
        defaults: &GridDefaults,
    ) -> TickStyle {
        if is_zero_line {
            resolve_style(&self.zero_line_style_options(), &defaults.zero_line)
        } else {
            resolve_style(&self.tick_style_options(index), &defaults.grid)
        }
    }
}

/// Options for the border a scale draws along its own edge.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct BorderOptions {
    /// Whether the border is explicit. Hidden borders still take part in deduplication as
    /// undefined candidates.
    pub display: bool,
    /// Border color.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "serde_css::color"))]
    pub color: Option<Color>,
    /// Border width.
    pub line_width: Option<f64>,
    /// Border dash pattern.
    pub border_dash: Option<Dashes>,
    /// Border dash offset.
    pub border_dash_offset: Option<f64>,
}

impl BorderOptions {
    /// An explicit border with the given style.
    pub fn explicit(style: TickStyle) -> Self {
        Self {
            display: true,
            color: Some(style.color),
            line_width: Some(style.line_width),
            border_dash: Some(style.dash),
            border_dash_offset: Some(style.dash_offset),
        }
    }

    /// Enables or disables the explicit border.
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// The authored (partial) border style.
    pub fn style_options(&self) -> LineStyleOptions {
        LineStyleOptions {
            line_width: self.line_width,
            color: self.color,
            border_dash: self.border_dash.clone(),
            border_dash_offset: self.border_dash_offset,
        }
    }
}

/// Everything a draw pass reads from a scale's options.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ScaleOptions {
    /// Whether the scale is shown at all. Hidden scales contribute nothing.
    pub display: bool,
    /// The scale kind.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ScaleKind,
    /// Gridline options.
    pub grid_lines: GridLineOptions,
    /// Border options.
    pub border: BorderOptions,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            display: true,
            kind: ScaleKind::default(),
            grid_lines: GridLineOptions::default(),
            border: BorderOptions::default(),
        }
    }
}

impl ScaleOptions {
    /// Shows or hides the scale.
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// Sets the scale kind.
    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the gridline options.
    pub fn with_grid_lines(mut self, grid_lines: GridLineOptions) -> Self {
        self.grid_lines = grid_lines;
        self
    }

    /// Sets the border options.
    pub fn with_border(mut self, border: BorderOptions) -> Self {
        self.border = border;
        self
    }
}

/// `deserialize_with` helpers for CSS color strings.
#[cfg(feature = "serde")]
mod serde_css {
    extern crate alloc;

    use alloc::string::String;

    use peniko::Color;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    use crate::style::{PerIndex, parse_color};

    struct CssColor(Color);

    impl<'de> Deserialize<'de> for CssColor {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            parse_color(&s).map(CssColor).map_err(D::Error::custom)
        }
    }

    pub(super) fn color<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Color>, D::Error> {
        Ok(Option::<CssColor>::deserialize(d)?.map(|c| c.0))
    }

    pub(super) fn per_index_color<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<PerIndex<Color>>, D::Error> {
        Ok(
            Option::<PerIndex<CssColor>>::deserialize(d)?.map(|colors| match colors {
                PerIndex::Uniform(c) => PerIndex::Uniform(c.0),
                PerIndex::PerTick(cs) => PerIndex::PerTick(cs.into_iter().map(|c| c.0).collect()),
            }),
        )
    }
}
