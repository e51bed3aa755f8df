// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridline emission for one scale.

use kurbo::Rect;

use crate::defaults::OrientationDefaults;
use crate::scale::GridScale;
use crate::segment::{BorderBuffer, BorderSegment, LineDirection};
use crate::style::GridDefaults;
use crate::surface::Surface;

/// Strokes the interior gridlines of `scale` and buffers its two outermost ones as undefined
/// border candidates.
///
/// Gridlines run across the scale (a horizontal axis gets vertical lines) and span all of
/// `area`. The first and last gridline are never stroked here: they sit on the chart area's
/// edges, where [`resolve_borders`] decides which of the competing lines gets drawn.
///
/// The style of gridline 0 is offered to `defaults` as the style for undefined borders running
/// in the same direction; only the first scale per direction gets it. Candidates are buffered
/// either way, each with its own resolved style, and marked `force_style` when it is the zero
/// line.
///
/// Nothing happens when gridlines are hidden or the scale has fewer than two ticks.
///
/// [`resolve_borders`]: crate::resolve_borders
pub fn emit_grid_lines<S, Su>(
    scale: &S,
    area: Rect,
    fallback: &GridDefaults,
    defaults: &mut OrientationDefaults,
    buffer: &mut BorderBuffer,
    surface: &mut Su,
) where
    S: GridScale + ?Sized,
    Su: Surface + ?Sized,
{
    let grid = &scale.options().grid_lines;
    let ticks = scale.tick_count();
    if !grid.display || ticks < 2 {
        return;
    }

    // Offset gridlines bracket every tick, so there is one more of them.
    let count = ticks + usize::from(grid.offset_grid_lines);
    let last = count - 1;
    let zero = scale.zero_line_index().unwrap_or(0);
    let direction = LineDirection::of_grid_lines(scale);
    let style_at = |index: usize| grid.resolve_tick_style(index, index == zero, fallback);

    let first_style = style_at(0);
    if !defaults.claim(direction, first_style.clone()) {
        tracing::trace!(?direction, "undefined border style already claimed");
    }

    let first = direction.line_across(scale.grid_line_pixel(0), area);
    buffer.push(BorderSegment::undefined(
        first,
        direction,
        first_style,
        zero == 0,
    ));
    // The closing candidate sits on the far chart-area edge (right or bottom), wherever the
    // last tick happens to be.
    let far_edge = match direction {
        LineDirection::Vertical => area.x1,
        LineDirection::Horizontal => area.y1,
    };
    buffer.push(BorderSegment::undefined(
        direction.line_across(far_edge, area),
        direction,
        style_at(last),
        zero == last,
    ));

    for index in 1..last {
        let style = style_at(index);
        let line = direction.line_across(scale.grid_line_pixel(index), area);
        surface.stroke_line(direction.shift(line, style.pixel_alignment()), &style);
    }
}
