// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border segments buffered during a draw pass.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Line, Rect, Vec2};

use crate::scale::GridScale;
use crate::style::TickStyle;

/// Direction of a line on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineDirection {
    /// A line of constant `y`.
    Horizontal,
    /// A line of constant `x`.
    Vertical,
}

impl LineDirection {
    /// Direction of the gridlines a scale draws: across the axis, so a horizontal axis has
    /// vertical gridlines.
    pub fn of_grid_lines(scale: &(impl GridScale + ?Sized)) -> Self {
        if scale.is_horizontal() {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Direction of the border a scale draws along its own edge.
    pub fn of_border(scale: &(impl GridScale + ?Sized)) -> Self {
        if scale.is_horizontal() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// A line in this direction at `pixel`, spanning `area` end to end.
    pub fn line_across(self, pixel: f64, area: Rect) -> Line {
        match self {
            Self::Vertical => Line::new((pixel, area.y0), (pixel, area.y1)),
            Self::Horizontal => Line::new((area.x0, pixel), (area.x1, pixel)),
        }
    }

    /// Moves `line` perpendicular to this direction by `offset`.
    pub fn shift(self, line: Line, offset: f64) -> Line {
        let delta = match self {
            Self::Vertical => Vec2::new(offset, 0.0),
            Self::Horizontal => Vec2::new(0.0, offset),
        };
        Line::new(line.p0 + delta, line.p1 + delta)
    }
}

/// Whether a border was asked for or merely implied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// Configured by a scale; always drawn.
    Explicit,
    /// Implied by a scale's outermost gridline or hidden border; drawn only if nothing else
    /// claims the same place.
    Undefined,
}

/// A candidate border line.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderSegment {
    /// Geometric position, before pixel alignment.
    pub line: Line,
    /// Direction of the line itself.
    pub direction: LineDirection,
    /// The style the producer resolved for this line.
    pub style: TickStyle,
    /// Explicit or undefined.
    pub kind: BorderKind,
    /// Keep `style` even when undefined (set for zero-line candidates).
    pub force_style: bool,
}

impl BorderSegment {
    /// An explicit border.
    pub fn explicit(line: Line, direction: LineDirection, style: TickStyle) -> Self {
        Self {
            line,
            direction,
            style,
            kind: BorderKind::Explicit,
            force_style: false,
        }
    }

    /// An undefined border candidate.
    pub fn undefined(
        line: Line,
        direction: LineDirection,
        style: TickStyle,
        force_style: bool,
    ) -> Self {
        Self {
            line,
            direction,
            style,
            kind: BorderKind::Undefined,
            force_style,
        }
    }

    /// Whether this segment is explicit.
    pub fn is_explicit(&self) -> bool {
        self.kind == BorderKind::Explicit
    }

    /// Identity used for overlap checks.
    pub fn key(&self) -> SegmentKey {
        SegmentKey::new(self.line)
    }
}

/// Bit-exact identity of a segment's endpoints.
///
/// Two segments overlap only when all four coordinates are equal. `-0.0` and `0.0` are treated
/// as the same coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SegmentKey([u64; 4]);

impl SegmentKey {
    /// Key for `line`.
    pub fn new(line: Line) -> Self {
        let bits = |v: f64| if v == 0.0 { 0 } else { v.to_bits() };
        Self([
            bits(line.p0.x),
            bits(line.p0.y),
            bits(line.p1.x),
            bits(line.p1.y),
        ])
    }
}

/// Ordered list of border candidates for one draw pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderBuffer {
    segments: Vec<BorderSegment>,
}

impl BorderBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: BorderSegment) {
        self.segments.push(segment);
    }

    /// Segments in insertion order.
    pub fn segments(&self) -> &[BorderSegment] {
        &self.segments
    }

    /// Number of buffered segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
