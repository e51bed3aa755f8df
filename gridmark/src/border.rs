// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The border a scale draws along its own edge.

use kurbo::Rect;

use crate::scale::{AxisPosition, GridScale};
use crate::segment::{BorderSegment, LineDirection};
use crate::style::{GridDefaults, resolve_style};

/// Builds the border segment for `scale`.
///
/// The border runs along the edge of the axis that faces the chart area and spans all of
/// `area`. It is explicit when the scale's `border.display` is set. Otherwise it is still
/// returned, as an undefined candidate, so the edge gets closed if no other scale claims it.
pub fn collect_scale_border<S>(scale: &S, area: Rect, fallback: &GridDefaults) -> BorderSegment
where
    S: GridScale + ?Sized,
{
    let bounds = scale.bounds();
    let pixel = match scale.position() {
        AxisPosition::Top => bounds.y1,
        AxisPosition::Bottom => bounds.y0,
        AxisPosition::Left => bounds.x1,
        AxisPosition::Right => bounds.x0,
    };
    let direction = LineDirection::of_border(scale);
    let border = &scale.options().border;
    let line = direction.line_across(pixel, area);
    let style = resolve_style(&border.style_options(), &fallback.border);
    if border.display {
        BorderSegment::explicit(line, direction, style)
    } else {
        BorderSegment::undefined(line, direction, style, false)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Line;
    use peniko::color::palette::css;

    use super::*;
    use crate::options::{BorderOptions, ScaleOptions};
    use crate::scale::AxisScale;
    use crate::segment::BorderKind;
    use crate::style::TickStyle;

    const AREA: Rect = Rect::new(40.0, 20.0, 240.0, 180.0);

    #[test]
    fn border_sits_on_the_edge_facing_the_chart_area() {
        let cases = [
            (
                AxisPosition::Top,
                Rect::new(40.0, 0.0, 240.0, 20.0),
                Line::new((40.0, 20.0), (240.0, 20.0)),
            ),
            (
                AxisPosition::Bottom,
                Rect::new(40.0, 180.0, 240.0, 200.0),
                Line::new((40.0, 180.0), (240.0, 180.0)),
            ),
            (
                AxisPosition::Left,
                Rect::new(0.0, 20.0, 40.0, 180.0),
                Line::new((40.0, 20.0), (40.0, 180.0)),
            ),
            (
                AxisPosition::Right,
                Rect::new(240.0, 20.0, 280.0, 180.0),
                Line::new((240.0, 20.0), (240.0, 180.0)),
            ),
        ];
        for (position, bounds, expected) in cases {
            let scale = AxisScale::new(position, bounds, [0.0, 1.0]);
            let border = collect_scale_border(&scale, AREA, &GridDefaults::default());
            assert_eq!(border.line, expected, "{position:?}");
            assert_eq!(border.kind, BorderKind::Undefined, "hidden by default");
            assert_eq!(border.style, GridDefaults::default().border);
        }
    }

    #[test]
    fn displayed_border_is_explicit_with_its_own_style() {
        let style = TickStyle::solid(css::BLACK, 2.0).with_dash([3.0, 3.0], 0.0);
        let bounds = Rect::new(0.0, 20.0, 40.0, 180.0);
        let scale = AxisScale::new(AxisPosition::Left, bounds, [0.0]).with_options(
            ScaleOptions::default().with_border(BorderOptions::explicit(style.clone())),
        );

        let border = collect_scale_border(&scale, AREA, &GridDefaults::default());
        assert!(border.is_explicit());
        assert_eq!(border.direction, LineDirection::Vertical);
        assert_eq!(border.style, style);
    }
}
