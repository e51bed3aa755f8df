// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Line, Rect};
use peniko::Color;
use peniko::color::palette::css;

use crate::{
    AxisPosition, AxisScale, BorderKind, BorderOptions, GridDefaults, GridLineOptions,
    GridLines, GridPass, GridScale, LineDirection, ResolvedStroke, ScaleKind, ScaleOptions,
    StrokeRecorder, TickStyle,
};

const AREA: Rect = Rect::new(0.0, 0.0, 150.0, 80.0);

fn bottom(ticks: &[f64]) -> AxisScale {
    AxisScale::new(
        AxisPosition::Bottom,
        Rect::new(0.0, 80.0, 150.0, 100.0),
        ticks.to_vec(),
    )
}

fn top(ticks: &[f64]) -> AxisScale {
    AxisScale::new(
        AxisPosition::Top,
        Rect::new(0.0, -20.0, 150.0, 0.0),
        ticks.to_vec(),
    )
}

fn left(ticks: &[f64]) -> AxisScale {
    AxisScale::new(
        AxisPosition::Left,
        Rect::new(-30.0, 0.0, 0.0, 80.0),
        ticks.to_vec(),
    )
}

fn right(ticks: &[f64]) -> AxisScale {
    AxisScale::new(
        AxisPosition::Right,
        Rect::new(150.0, 0.0, 180.0, 80.0),
        ticks.to_vec(),
    )
}

fn with_border(scale: AxisScale, style: TickStyle) -> AxisScale {
    let options = scale
        .options()
        .clone()
        .with_border(BorderOptions::explicit(style));
    scale.with_options(options)
}

fn edges() -> [Line; 4] {
    [
        Line::new((AREA.x0, AREA.y0), (AREA.x1, AREA.y0)),
        Line::new((AREA.x0, AREA.y1), (AREA.x1, AREA.y1)),
        Line::new((AREA.x0, AREA.y0), (AREA.x0, AREA.y1)),
        Line::new((AREA.x1, AREA.y0), (AREA.x1, AREA.y1)),
    ]
}

fn resolve(scales: &[&AxisScale], defaults: &GridDefaults) -> Vec<ResolvedStroke> {
    let mut surface = StrokeRecorder::new();
    let mut pass = GridPass::new(AREA, defaults);
    for scale in scales {
        pass.add_scale(*scale, &mut surface);
    }
    pass.resolve()
}

fn at(strokes: &[ResolvedStroke], line: Line) -> Vec<&ResolvedStroke> {
    strokes.iter().filter(|s| s.line == line).collect()
}

#[test]
fn two_axis_chart_draws_each_edge_once() {
    let x = bottom(&[0.0, 50.0, 100.0, 150.0]);
    let y = with_border(left(&[0.0, 40.0, 80.0]), TickStyle::solid(css::BLACK, 2.0));
    let defaults = GridDefaults::default();

    let mut surface = StrokeRecorder::new();
    GridLines::new(defaults.clone()).before_datasets_draw(AREA, &[x, y], &mut surface);

    let got: Vec<(Line, TickStyle)> = surface
        .take()
        .into_iter()
        .map(|s| (s.line, s.style))
        .collect();
    let zero = defaults.zero_line.clone();
    let expected = vec![
        // Interior gridlines, streamed per scale.
        (Line::new((50.5, 0.0), (50.5, 80.0)), defaults.grid.clone()),
        (Line::new((100.5, 0.0), (100.5, 80.0)), defaults.grid.clone()),
        (Line::new((0.0, 40.5), (150.0, 40.5)), defaults.grid.clone()),
        // Right edge: the vertical default, claimed by the x scale's first gridline.
        (Line::new((150.5, 0.0), (150.5, 80.0)), zero.clone()),
        // Bottom edge: the x scale's hidden border, with the horizontal default.
        (Line::new((0.0, 80.5), (150.0, 80.5)), zero.clone()),
        // Top edge: the y scale's zero line keeps its own style.
        (Line::new((0.0, 0.5), (150.0, 0.5)), zero),
        // Left edge: the explicit border, even width so no alignment shift.
        (
            Line::new((0.0, 0.0), (0.0, 80.0)),
            TickStyle::solid(css::BLACK, 2.0),
        ),
    ];
    assert_eq!(got, expected);
}

#[test]
fn every_edge_is_drawn_exactly_once() {
    let styles = [
        TickStyle::solid(css::RED, 1.0),
        TickStyle::solid(css::GREEN, 2.0),
        TickStyle::solid(css::BLUE, 3.0),
        TickStyle::solid(css::ORANGE, 4.0),
    ];
    let defaults = GridDefaults::default();

    for mask in 0_u8..16 {
        let explicit = |bit: u8| mask & (1 << bit) != 0;
        let mut scales = vec![
            bottom(&[0.0, 50.0, 100.0, 150.0]),
            top(&[0.0, 75.0, 150.0]),
            left(&[0.0, 40.0, 80.0]),
            right(&[0.0, 20.0, 40.0, 60.0, 80.0]),
        ];
        for (bit, scale) in (0_u8..).zip(scales.iter_mut()) {
            if explicit(bit) {
                *scale = with_border(scale.clone(), styles[usize::from(bit)].clone());
            }
        }
        // A second left axis that never asks for a border.
        scales.push(left(&[0.0, 20.0, 80.0]));

        for rotation in 0..scales.len() {
            let mut order: Vec<&AxisScale> = scales.iter().collect();
            order.rotate_left(rotation);
            let strokes = resolve(&order, &defaults);

            // Edges in `edges()` order are top, bottom, left, right; bits are bottom, top,
            // left, right.
            for (edge, bit) in edges().into_iter().zip([1_u8, 0, 2, 3]) {
                let drawn = at(&strokes, edge);
                assert_eq!(
                    drawn.len(),
                    1,
                    "mask {mask:#06b}, rotation {rotation}, edge {edge:?}: {drawn:?}"
                );
                if explicit(bit) {
                    assert_eq!(drawn[0].kind, BorderKind::Explicit);
                    assert_eq!(drawn[0].style, styles[usize::from(bit)]);
                } else {
                    assert_eq!(drawn[0].kind, BorderKind::Undefined);
                }
            }
        }
    }
}

#[test]
fn first_scale_of_a_direction_sets_the_undefined_border_style() {
    let grid = |color: Color| {
        ScaleOptions::default().with_grid_lines(
            GridLineOptions::default()
                .with_color(color)
                .with_zero_line_index(1),
        )
    };
    let a = bottom(&[0.0, 50.0, 100.0, 150.0]).with_options(grid(css::RED));
    let b = top(&[0.0, 75.0, 150.0]).with_options(grid(css::BLUE));
    let right_edge = edges()[3];
    let defaults = GridDefaults::default();

    let strokes = resolve(&[&a, &b], &defaults);
    assert_eq!(at(&strokes, right_edge)[0].style.color, css::RED);

    let strokes = resolve(&[&b, &a], &defaults);
    assert_eq!(at(&strokes, right_edge)[0].style.color, css::BLUE);

    // Nobody draws horizontal gridlines, so horizontal edges use the global fallback.
    let top_edge = edges()[0];
    assert_eq!(at(&strokes, top_edge)[0].style, defaults.grid);
}

#[test]
fn interior_stroke_counts() {
    let defaults = GridDefaults::default();
    for n in 0..7_usize {
        for offset in [false, true] {
            let ticks: Vec<f64> = (0..n).map(|i| 10.0 * i as f64).collect();
            let mut scale = bottom(&ticks);
            scale.options_mut().grid_lines.offset_grid_lines = offset;

            let mut surface = StrokeRecorder::new();
            let mut pass = GridPass::new(AREA, &defaults);
            pass.add_scale(&scale, &mut surface);

            let (strokes, candidates) = match (n, offset) {
                (0 | 1, _) => (0, 0),
                (n, false) => (n - 2, 2),
                (n, true) => (n - 1, 2),
            };
            assert_eq!(surface.len(), strokes, "n = {n}, offset = {offset}");
            // Plus the scale's own border candidate.
            assert_eq!(pass.buffer().len(), candidates + 1, "n = {n}, offset = {offset}");
        }
    }
}

#[test]
fn zero_line_style_survives_deduplication() {
    let zero = TickStyle::solid(css::RED, 3.0);
    // Claims the horizontal default, but its first tick is below the top edge.
    let a = left(&[20.0, 50.0, 80.0]).with_options(
        ScaleOptions::default().with_grid_lines(
            GridLineOptions::default()
                .with_color(css::BLUE)
                .with_zero_line_index(1),
        ),
    );
    let b = right(&[0.0, 40.0, 80.0]).with_options(
        ScaleOptions::default()
            .with_grid_lines(GridLineOptions::default().with_zero_line(zero.clone())),
    );

    let strokes = resolve(&[&a, &b], &GridDefaults::default());
    let [top_edge, bottom_edge, ..] = edges();
    assert_eq!(at(&strokes, top_edge)[0].style, zero);
    assert_eq!(at(&strokes, bottom_edge)[0].style.color, css::BLUE);
}

#[test]
fn zero_line_wins_a_shared_edge_against_an_earlier_scale() {
    let zero = TickStyle::solid(css::RED, 3.0);
    // Both scales start on the top edge; only the second one has its zero line there.
    let a = left(&[0.0, 40.0, 80.0]).with_options(
        ScaleOptions::default().with_grid_lines(
            GridLineOptions::default()
                .with_color(css::BLUE)
                .with_zero_line_index(1),
        ),
    );
    let b = right(&[0.0, 40.0, 80.0]).with_options(
        ScaleOptions::default()
            .with_grid_lines(GridLineOptions::default().with_zero_line(zero.clone())),
    );

    for order in [[&a, &b], [&b, &a]] {
        let strokes = resolve(&order, &GridDefaults::default());
        let [top_edge, ..] = edges();
        let drawn = at(&strokes, top_edge);
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].style, zero);
    }
}

#[test]
fn explicit_border_beats_zero_line() {
    let zero = TickStyle::solid(css::RED, 3.0);
    let border = TickStyle::solid(css::BLACK, 1.0);
    let y = left(&[0.0, 40.0, 80.0]).with_options(
        ScaleOptions::default()
            .with_grid_lines(GridLineOptions::default().with_zero_line(zero))
            .with_border(BorderOptions::explicit(border.clone())),
    );
    let x = with_border(top(&[0.0, 150.0]), border.clone());

    let strokes = resolve(&[&y, &x], &GridDefaults::default());
    let drawn = at(&strokes, edges()[0]);
    assert_eq!(drawn.len(), 1);
    assert_eq!(drawn[0].style, border);
}

#[test]
fn radial_primary_scale_draws_nothing() {
    let mut radial = bottom(&[0.0, 50.0, 100.0, 150.0]);
    radial.options_mut().kind = ScaleKind::RadialLinear;
    let y = left(&[0.0, 40.0, 80.0]);

    let mut surface = StrokeRecorder::new();
    let hook = GridLines::default();
    hook.before_datasets_draw(AREA, &[radial.clone(), y.clone()], &mut surface);
    assert!(surface.is_empty());

    // Only the first scale decides.
    hook.before_datasets_draw(AREA, &[y, radial], &mut surface);
    assert!(!surface.is_empty());
}

#[test]
fn hidden_scales_contribute_nothing() {
    let hidden = bottom(&[0.0, 50.0, 100.0, 150.0])
        .with_options(ScaleOptions::default().with_display(false));

    let defaults = GridDefaults::default();
    let mut surface = StrokeRecorder::new();
    let mut pass = GridPass::new(AREA, &defaults);
    pass.add_scale(&hidden, &mut surface);
    assert!(surface.is_empty());
    assert!(pass.buffer().is_empty());
    assert_eq!(pass.orientation_defaults().get(LineDirection::Vertical), None);
}

#[test]
fn scale_without_gridlines_still_closes_its_edge() {
    let x = bottom(&[0.0, 50.0, 100.0, 150.0]).with_options(
        ScaleOptions::default().with_grid_lines(GridLineOptions::default().with_display(false)),
    );
    let defaults = GridDefaults::default();

    let strokes = resolve(&[&x], &defaults);
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].line, edges()[1]);
    assert_eq!(strokes[0].style, defaults.grid, "unclaimed direction");
}

#[test]
fn mixed_scale_types_through_trait_objects() {
    struct Fixed(ScaleOptions);

    impl GridScale for Fixed {
        fn position(&self) -> AxisPosition {
            AxisPosition::Left
        }

        fn bounds(&self) -> Rect {
            Rect::new(-30.0, 0.0, 0.0, 80.0)
        }

        fn tick_count(&self) -> usize {
            5
        }

        fn grid_line_pixel(&self, index: usize) -> f64 {
            20.0 * index as f64
        }

        fn options(&self) -> &ScaleOptions {
            &self.0
        }
    }

    let x = bottom(&[0.0, 50.0, 100.0, 150.0]);
    let y = Fixed(ScaleOptions::default());
    let scales: [&dyn GridScale; 2] = [&x, &y];

    let mut surface = StrokeRecorder::new();
    GridLines::default().before_datasets_draw(AREA, &scales, &mut surface);
    // 2 + 3 interior gridlines, 4 edges.
    assert_eq!(surface.len(), 9);
}

#[test]
fn custom_fallback_styles_reach_undefined_borders() {
    let fallback = GridDefaults::default().with_grid(TickStyle::solid(css::PURPLE, 2.0));
    let x = bottom(&[0.0, 150.0]).with_options(
        ScaleOptions::default().with_grid_lines(GridLineOptions::default().with_display(false)),
    );

    let mut surface = StrokeRecorder::new();
    GridLines::new(fallback).before_datasets_draw(AREA, &[x], &mut surface);
    assert_eq!(surface.strokes()[0].style.color, css::PURPLE);
    assert_eq!(
        surface.strokes()[0].line,
        Line::new((0.0, 80.0), (150.0, 80.0)),
        "even width, no shift"
    );
}
