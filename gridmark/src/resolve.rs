// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border overlap resolution.
//!
//! Several scales may want a line on the same chart-area edge. Resolution keeps every explicit
//! border, and lets an undefined candidate through only if nothing already occupies its exact
//! position. Positions are compared before pixel alignment, so candidates of different widths
//! at the same edge still collide.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Line;

use crate::defaults::ResolvedDefaults;
use crate::segment::{BorderBuffer, BorderKind, LineDirection, SegmentKey};
use crate::style::TickStyle;
use crate::surface::Surface;

/// A border segment that survived resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStroke {
    /// Geometric position, before pixel alignment.
    pub line: Line,
    /// Direction of the line.
    pub direction: LineDirection,
    /// The style to stroke with.
    pub style: TickStyle,
    /// Kind of the segment this stroke came from.
    pub kind: BorderKind,
}

impl ResolvedStroke {
    /// The line to stroke, shifted onto pixel centers for its width.
    pub fn aligned_line(&self) -> Line {
        self.direction.shift(self.line, self.style.pixel_alignment())
    }
}

/// Decides which buffered segments get drawn, and with which style.
///
/// Explicit segments are always kept with their own style. An undefined segment is dropped if
/// an explicit segment sits at the same position. Of several undefined segments sharing a
/// position, one is kept: the first carrying `force_style`, or else the first in buffer order.
/// Kept undefined segments use the orientation default for their direction unless they carry
/// `force_style`.
///
/// The result is in buffer order.
pub fn resolve_borders(buffer: &BorderBuffer, defaults: &ResolvedDefaults) -> Vec<ResolvedStroke> {
    let segments = buffer.segments();
    let occupied: HashSet<SegmentKey> = segments
        .iter()
        .filter(|s| s.is_explicit())
        .map(|s| s.key())
        .collect();

    // Winning undefined segment per free position, as (buffer index, force_style).
    let mut winners: HashMap<SegmentKey, (usize, bool)> = HashMap::new();
    for (index, segment) in segments.iter().enumerate() {
        let key = segment.key();
        if segment.is_explicit() || occupied.contains(&key) {
            continue;
        }
        winners
            .entry(key)
            .and_modify(|winner| {
                if segment.force_style && !winner.1 {
                    *winner = (index, true);
                }
            })
            .or_insert((index, segment.force_style));
    }

    let mut out = Vec::with_capacity(buffer.len());
    for (index, segment) in segments.iter().enumerate() {
        let style = match segment.kind {
            BorderKind::Explicit => segment.style.clone(),
            BorderKind::Undefined => {
                if winners.get(&segment.key()).map(|w| w.0) != Some(index) {
                    tracing::trace!(line = ?segment.line, "undefined border suppressed");
                    continue;
                }
                if segment.force_style {
                    segment.style.clone()
                } else {
                    defaults.get(segment.direction).clone()
                }
            }
        };
        out.push(ResolvedStroke {
            line: segment.line,
            direction: segment.direction,
            style,
            kind: segment.kind,
        });
    }
    out
}

/// Resolves the buffered borders and strokes the survivors onto `surface`, in buffer order.
pub fn draw_borders<Su>(buffer: &BorderBuffer, defaults: &ResolvedDefaults, surface: &mut Su)
where
    Su: Surface + ?Sized,
{
    let strokes = resolve_borders(buffer, defaults);
    tracing::trace!(
        candidates = buffer.len(),
        drawn = strokes.len(),
        "borders resolved"
    );
    for stroke in &strokes {
        surface.stroke_line(stroke.aligned_line(), &stroke.style);
    }
}
