// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing side of a draw pass.
//!
//! Rasterization stays downstream: a draw pass only issues straight strokes through
//! [`Surface`]. Hosts plug in their renderer (a canvas, a `vello` scene, an SVG writer), and
//! [`StrokeRecorder`] keeps the strokes in memory for tests and inspection.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Line;

use crate::style::TickStyle;

/// A target that can stroke straight lines.
///
/// Strokes arrive in paint order. Later strokes paint over earlier ones.
pub trait Surface {
    /// Strokes `line` with `style`.
    ///
    /// `line` is already pixel-aligned; implementations should draw it as given.
    fn stroke_line(&mut self, line: Line, style: &TickStyle);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn stroke_line(&mut self, line: Line, style: &TickStyle) {
        (**self).stroke_line(line, style);
    }
}

/// One stroke captured by [`StrokeRecorder`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedStroke {
    /// The stroked line.
    pub line: Line,
    /// The style it was stroked with.
    pub style: TickStyle,
}

/// A [`Surface`] that records strokes instead of drawing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeRecorder {
    strokes: Vec<RecordedStroke>,
}

impl StrokeRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded strokes in paint order.
    pub fn strokes(&self) -> &[RecordedStroke] {
        &self.strokes
    }

    /// Takes the recorded strokes, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<RecordedStroke> {
        core::mem::take(&mut self.strokes)
    }

    /// Number of recorded strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

impl Surface for StrokeRecorder {
    fn stroke_line(&mut self, line: Line, style: &TickStyle) {
        self.strokes.push(RecordedStroke {
            line,
            style: style.clone(),
        });
    }
}
