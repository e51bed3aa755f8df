// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scale side of a draw pass.
//!
//! Tick generation and value-to-pixel mapping belong to the host charting library. A draw pass
//! only needs the small view of a scale described by [`GridScale`]. [`AxisScale`] is a
//! ready-made implementation for hosts (and tests) that don't have their own.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Rect;

use crate::options::{ScaleKind, ScaleOptions};

/// Axis placement relative to the chart area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(rename_all = "camelCase"))]
pub enum AxisPosition {
    /// A horizontal axis above the chart area.
    Top,
    /// A horizontal axis below the chart area.
    Bottom,
    /// A vertical axis left of the chart area.
    Left,
    /// A vertical axis right of the chart area.
    Right,
}

impl AxisPosition {
    /// Returns `true` for `Top` and `Bottom`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// What a draw pass needs to know about one scale.
pub trait GridScale {
    /// Where the axis sits relative to the chart area.
    fn position(&self) -> AxisPosition;

    /// Whether the axis runs left to right.
    fn is_horizontal(&self) -> bool {
        self.position().is_horizontal()
    }

    /// The axis' own bounding box (ticks and labels, outside the chart area).
    fn bounds(&self) -> Rect;

    /// Number of ticks.
    fn tick_count(&self) -> usize;

    /// Pixel coordinate, along this axis, of gridline `index`.
    ///
    /// Without offset gridlines `index` is a tick index. With
    /// [`GridLineOptions::offset_grid_lines`] it addresses the gaps around ticks, and
    /// `index == tick_count()` is valid.
    ///
    /// [`GridLineOptions::offset_grid_lines`]: crate::GridLineOptions::offset_grid_lines
    fn grid_line_pixel(&self, index: usize) -> f64;

    /// The scale's options.
    fn options(&self) -> &ScaleOptions;

    /// Index of the tick that gets the zero-line style, if any.
    fn zero_line_index(&self) -> Option<usize> {
        self.options().grid_lines.zero_line_index
    }
}

impl<S: GridScale + ?Sized> GridScale for &S {
    fn position(&self) -> AxisPosition {
        (**self).position()
    }

    fn is_horizontal(&self) -> bool {
        (**self).is_horizontal()
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn tick_count(&self) -> usize {
        (**self).tick_count()
    }

    fn grid_line_pixel(&self, index: usize) -> f64 {
        (**self).grid_line_pixel(index)
    }

    fn options(&self) -> &ScaleOptions {
        (**self).options()
    }

    fn zero_line_index(&self) -> Option<usize> {
        (**self).zero_line_index()
    }
}

/// A scale with precomputed tick pixels.
///
/// Ticks are stored in increasing pixel order: left to right for horizontal axes, top to bottom
/// for vertical ones.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisScale {
    position: AxisPosition,
    bounds: Rect,
    ticks: Vec<f64>,
    /// Band count of a category scale; its ticks follow the offset flag.
    bands: Option<usize>,
    zero_line_index: Option<usize>,
    options: ScaleOptions,
}

impl AxisScale {
    /// Creates a scale from explicit tick pixel positions.
    pub fn new(position: AxisPosition, bounds: Rect, ticks: impl Into<Vec<f64>>) -> Self {
        Self {
            position,
            bounds,
            ticks: ticks.into(),
            bands: None,
            zero_line_index: None,
            options: ScaleOptions::default(),
        }
    }

    /// Creates a linear scale over `domain` with "nice" ticks.
    ///
    /// The domain is widened to the outermost nice ticks so the first and last tick land on the
    /// axis ends. Larger values sit further right (horizontal) or further up (vertical). If one
    /// of the ticks is exactly zero, it becomes the zero line.
    pub fn linear(
        position: AxisPosition,
        bounds: Rect,
        domain: (f64, f64),
        tick_count: usize,
    ) -> Self {
        let mut values = nice_ticks(domain.0, domain.1, tick_count);
        let (lo, hi) = match (values.first(), values.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => domain,
        };
        let (r0, r1) = axis_extent(position, bounds);
        // Pixel order: vertical axes grow downwards, so the largest value comes first.
        let pixels: Vec<f64> = if position.is_horizontal() {
            values
                .iter()
                .map(|&v| lerp(r0, r1, unit(v, lo, hi)))
                .collect()
        } else {
            values.reverse();
            values
                .iter()
                .map(|&v| lerp(r1, r0, unit(v, lo, hi)))
                .collect()
        };
        let zero_line_index = values.iter().position(|&v| v == 0.0);
        Self {
            zero_line_index,
            options: ScaleOptions::default().with_kind(ScaleKind::Linear),
            ..Self::new(position, bounds, pixels)
        }
    }

    /// Creates a category scale with `count` equal bands.
    ///
    /// By default the first and last category sit on the axis ends and the rest are spread
    /// evenly between them. With [`GridLineOptions::offset_grid_lines`] each category sits at the
    /// center of its band and gridlines fall between bands.
    ///
    /// [`GridLineOptions::offset_grid_lines`]: crate::GridLineOptions::offset_grid_lines
    pub fn category(position: AxisPosition, bounds: Rect, count: usize) -> Self {
        Self {
            bands: Some(count),
            options: ScaleOptions::default().with_kind(ScaleKind::Category),
            ..Self::new(position, bounds, Vec::new())
        }
    }

    /// Replaces the scale options.
    ///
    /// The scale kind set by [`AxisScale::linear`] or [`AxisScale::category`] is replaced as
    /// well.
    pub fn with_options(mut self, options: ScaleOptions) -> Self {
        self.options = options;
        self
    }

    /// Pins the zero line to a tick index (overridden by an explicit option).
    pub fn with_zero_line_index(mut self, index: usize) -> Self {
        self.zero_line_index = Some(index);
        self
    }

    /// Mutable access to the options.
    pub fn options_mut(&mut self) -> &mut ScaleOptions {
        &mut self.options
    }

    /// Tick pixel positions.
    pub fn ticks(&self) -> Vec<f64> {
        (0..self.tick_count()).map(|i| self.tick_pixel(i)).collect()
    }

    fn tick_pixel(&self, index: usize) -> f64 {
        let Some(bands) = self.bands else {
            return self.ticks[index];
        };
        let (r0, r1) = axis_extent(self.position, self.bounds);
        let i = index as f64;
        let n = bands as f64;
        if self.options.grid_lines.offset_grid_lines {
            r0 + (r1 - r0) * (i + 0.5) / n
        } else if bands < 2 {
            0.5 * (r0 + r1)
        } else {
            r0 + (r1 - r0) * i / (n - 1.0)
        }
    }
}

impl GridScale for AxisScale {
    fn position(&self) -> AxisPosition {
        self.position
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn tick_count(&self) -> usize {
        self.bands.unwrap_or(self.ticks.len())
    }

    fn grid_line_pixel(&self, index: usize) -> f64 {
        let (start, end) = axis_extent(self.position, self.bounds);
        let count = self.tick_count();
        if !self.options.grid_lines.offset_grid_lines {
            return if index < count {
                self.tick_pixel(index)
            } else {
                end
            };
        }
        // Offset gridlines sit halfway between neighbouring ticks; the outer two sit on the axis
        // ends.
        match index {
            0 => start,
            i if i >= count => end,
            i => 0.5 * (self.tick_pixel(i - 1) + self.tick_pixel(i)),
        }
    }

    fn options(&self) -> &ScaleOptions {
        &self.options
    }

    fn zero_line_index(&self) -> Option<usize> {
        self.options
            .grid_lines
            .zero_line_index
            .or(self.zero_line_index)
    }
}

/// Pixel range covered by an axis, in increasing order.
fn axis_extent(position: AxisPosition, bounds: Rect) -> (f64, f64) {
    if position.is_horizontal() {
        (bounds.x0, bounds.x1)
    } else {
        (bounds.y0, bounds.y1)
    }
}

fn unit(v: f64, lo: f64, hi: f64) -> f64 {
    let denom = hi - lo;
    if denom == 0.0 { 0.0 } else { (v - lo) / denom }
}

/// Interpolates so that `t == 0` and `t == 1` hit the endpoints exactly.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Round values spaced one "nice" step apart, covering `[a, b]` in roughly `count` intervals.
fn nice_ticks(a: f64, b: f64, count: usize) -> Vec<f64> {
    let (min, max) = if a <= b { (a, b) } else { (b, a) };
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let first = (min / step).floor();
    let last = (max / step).ceil();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to a small non-negative range; NaN saturates to 0"
    )]
    let intervals = (last - first).clamp(0.0, 10_000.0) as usize;
    (0..=intervals)
        .map(|i| {
            let v = (first + i as f64) * step;
            // Snap values like 1e-17 to a clean zero so the zero line can be found.
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

/// Rounds a raw step up to 1, 2, 5 or 10 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let magnitude = 10_f64.powf(raw.log10().floor());
    let mantissa = raw / magnitude;
    let nice = [(7.5, 10.0), (3.5, 5.0), (1.5, 2.0)]
        .into_iter()
        .find(|&(threshold, _)| mantissa >= threshold)
        .map_or(1.0, |(_, nice)| nice);
    nice * magnitude
}
