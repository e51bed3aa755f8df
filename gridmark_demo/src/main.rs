// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridline demos for `gridmark`.
//!
//! Without arguments, renders the built-in demo charts. Otherwise each argument is a JSON chart
//! description (see `chart.rs`) rendered next to the input as `<name>.svg`.
mod chart;
mod svg;

use std::path::{Path, PathBuf};

use gridmark::{
    AxisPosition, AxisScale, BorderOptions, GridDefaults, GridLineOptions, GridLines, ScaleKind,
    ScaleOptions, TickStyle,
};
use kurbo::Rect;
use peniko::color::palette::css;

use crate::chart::ChartFile;
use crate::svg::SvgSurface;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid chart `{}`: {source}", path.display())]
    Chart {
        path: PathBuf,
        source: serde_json::Error,
    },
}

struct Demo {
    name: &'static str,
    area: Rect,
    scales: Vec<AxisScale>,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = if args.is_empty() {
        render_demos()
    } else {
        args.iter().try_for_each(|arg| render_file(Path::new(arg)))
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn render_demos() -> Result<(), DemoError> {
    for demo in [two_axes_demo(), four_axes_demo(), category_demo()] {
        let path = PathBuf::from(format!("gridmark_demo_{}.svg", demo.name));
        render(&path, demo.area, &demo.scales)?;
    }
    Ok(())
}

fn render_file(input: &Path) -> Result<(), DemoError> {
    let text = std::fs::read_to_string(input).map_err(|source| DemoError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let chart: ChartFile = serde_json::from_str(&text).map_err(|source| DemoError::Chart {
        path: input.to_path_buf(),
        source,
    })?;
    render(&input.with_extension("svg"), chart.area(), &chart.scales())
}

fn render(path: &Path, area: Rect, scales: &[AxisScale]) -> Result<(), DemoError> {
    let mut surface = SvgSurface::default();
    GridLines::new(GridDefaults::default()).before_datasets_draw(area, scales, &mut surface);

    let view_box = scales
        .iter()
        .map(gridmark::GridScale::bounds)
        .fold(area, |acc, b| acc.union(b))
        .inflate(10.0, 10.0);
    std::fs::write(path, surface.to_svg_string(view_box, area)).map_err(|source| {
        DemoError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    println!("wrote {} ({} lines)", path.display(), surface.len());
    Ok(())
}

/// One horizontal and one vertical axis; the vertical one asks for a 2px border.
fn two_axes_demo() -> Demo {
    let area = Rect::new(40.0, 20.0, 340.0, 180.0);
    let x = AxisScale::new(
        AxisPosition::Bottom,
        Rect::new(40.0, 180.0, 340.0, 200.0),
        [40.0, 140.0, 240.0, 340.0],
    );
    let y = AxisScale::new(
        AxisPosition::Left,
        Rect::new(0.0, 20.0, 40.0, 180.0),
        [20.0, 100.0, 180.0],
    )
    .with_options(
        ScaleOptions::default()
            .with_border(BorderOptions::explicit(TickStyle::solid(css::BLACK, 2.0))),
    );
    Demo {
        name: "two_axes",
        area,
        scales: vec![x, y],
    }
}

/// Axes on all four sides, competing for every edge.
fn four_axes_demo() -> Demo {
    let area = Rect::new(50.0, 30.0, 450.0, 280.0);
    let bottom = AxisScale::linear(
        AxisPosition::Bottom,
        Rect::new(50.0, 280.0, 450.0, 300.0),
        (-50.0, 100.0),
        6,
    )
    .with_options(
        ScaleOptions::default().with_grid_lines(
            GridLineOptions::default()
                .with_color(css::STEEL_BLUE.with_alpha(0.4))
                .with_zero_line(TickStyle::solid(css::STEEL_BLUE, 2.0)),
        ),
    );
    let top = AxisScale::linear(
        AxisPosition::Top,
        Rect::new(50.0, 10.0, 450.0, 30.0),
        (0.0, 1.0),
        4,
    )
    .with_options(
        ScaleOptions::default()
            .with_grid_lines(GridLineOptions::default().with_display(false))
            .with_border(BorderOptions::explicit(
                TickStyle::solid(css::DARK_SLATE_GRAY, 1.0).with_dash([6.0, 3.0], 0.0),
            )),
    );
    let left = AxisScale::linear(
        AxisPosition::Left,
        Rect::new(0.0, 30.0, 50.0, 280.0),
        (0.0, 50.0),
        5,
    )
    .with_options(
        ScaleOptions::default().with_grid_lines(
            GridLineOptions::default()
                .with_color(vec![
                    css::TOMATO,
                    css::ORANGE,
                    css::GOLD,
                    css::YELLOW_GREEN,
                    css::TEAL,
                ])
                .with_line_width(vec![1.0, 1.0, 2.0, 1.0, 1.0])
                .with_dash([4.0, 4.0], 2.0),
        ),
    );
    let right = AxisScale::linear(
        AxisPosition::Right,
        Rect::new(450.0, 30.0, 500.0, 280.0),
        (0.0, 1000.0),
        4,
    )
    .with_options(
        ScaleOptions::default()
            .with_border(BorderOptions::explicit(TickStyle::solid(css::CRIMSON, 3.0))),
    );
    Demo {
        name: "four_axes",
        area,
        scales: vec![bottom, top, left, right],
    }
}

/// A category axis with gridlines between the bands.
fn category_demo() -> Demo {
    let area = Rect::new(40.0, 20.0, 440.0, 220.0);
    let bands = AxisScale::category(
        AxisPosition::Bottom,
        Rect::new(40.0, 220.0, 440.0, 240.0),
        5,
    )
    .with_options(
        ScaleOptions::default()
            .with_kind(ScaleKind::Category)
            .with_grid_lines(GridLineOptions::default().with_offset_grid_lines(true)),
    );
    let values = AxisScale::linear(
        AxisPosition::Left,
        Rect::new(0.0, 20.0, 40.0, 220.0),
        (0.0, 12.0),
        4,
    );
    Demo {
        name: "categories",
        area,
        scales: vec![bands, values],
    }
}
