// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart gridlines and chart-area borders.
//!
//! Every scale of a cartesian chart wants lines on the edges of the chart area: its outermost
//! gridlines, and optionally a border along its own edge. This crate draws each of those edges
//! exactly once:
//! - Interior gridlines are stroked as soon as a scale is processed.
//! - Outermost gridlines and hidden borders become *undefined* border candidates. Borders a
//!   scale asks for are *explicit*.
//! - Once all scales are in, explicit borders are drawn, and each undefined candidate is drawn
//!   only if nothing else already occupies its position. Undefined candidates share one style
//!   per direction, taken from the first scale that draws gridlines in that direction.
//!
//! Scales are seen through the small [`GridScale`] trait, and strokes go to a [`Surface`], so
//! tick generation and rasterization stay with the host. [`GridLines::before_datasets_draw`] is
//! the one-call entry point; [`GridPass`] exposes the two phases separately.
//!
//! ```
//! use gridmark::{AxisPosition, AxisScale, GridDefaults, GridLines, StrokeRecorder};
//! use kurbo::Rect;
//!
//! let area = Rect::new(0.0, 0.0, 150.0, 80.0);
//! let x = AxisScale::new(
//!     AxisPosition::Bottom,
//!     Rect::new(0.0, 80.0, 150.0, 100.0),
//!     [0.0, 50.0, 100.0, 150.0],
//! );
//! let y = AxisScale::new(AxisPosition::Left, Rect::new(-30.0, 0.0, 0.0, 80.0), [0.0, 40.0, 80.0]);
//!
//! let mut surface = StrokeRecorder::new();
//! GridLines::new(GridDefaults::default()).before_datasets_draw(area, &[x, y], &mut surface);
//! // Two vertical and one horizontal interior gridline, plus the four edges.
//! assert_eq!(surface.len(), 7);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod border;
mod defaults;
#[cfg(not(feature = "std"))]
mod float;
mod grid_lines;
mod options;
mod pass;
#[cfg(test)]
mod pass_tests;
mod resolve;
mod scale;
mod segment;
mod style;
mod surface;

pub use border::collect_scale_border;
pub use defaults::{OrientationDefaults, ResolvedDefaults};
pub use grid_lines::emit_grid_lines;
pub use options::{BorderOptions, GridLineOptions, ScaleKind, ScaleOptions};
pub use pass::{GridLines, GridPass};
pub use resolve::{ResolvedStroke, draw_borders, resolve_borders};
pub use scale::{AxisPosition, AxisScale, GridScale};
pub use segment::{BorderBuffer, BorderKind, BorderSegment, LineDirection, SegmentKey};
pub use style::{
    Dashes, GridDefaults, LineStyleOptions, PerIndex, StyleError, TickStyle, parse_color,
    resolve_style,
};
pub use surface::{RecordedStroke, StrokeRecorder, Surface};
