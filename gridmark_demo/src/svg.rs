// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `gridmark_demo`.

use gridmark::{Surface, TickStyle};
use kurbo::{Line, Rect};
use peniko::Brush;

/// A [`Surface`] that writes each stroke as an SVG `<line>`.
#[derive(Debug, Default)]
pub(crate) struct SvgSurface {
    lines: Vec<String>,
}

impl SvgSurface {
    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    /// Wraps the recorded lines in an `<svg>` document.
    ///
    /// `area` gets a light background so the chart area's edges are easy to spot.
    pub(crate) fn to_svg_string(&self, view_box: Rect, area: Rect) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');
        out.push_str(&format!(
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#f8f8f8"/>"##,
            area.x0,
            area.y0,
            area.width(),
            area.height(),
        ));
        out.push('\n');
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn stroke_line(&mut self, line: Line, style: &TickStyle) {
        let mut out = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
        write_paint_attr(&mut out, "stroke", &style.brush());
        out.push_str(&format!(r#" stroke-width="{}""#, style.line_width));
        if !style.dash.is_empty() {
            let dashes: Vec<String> = style.dash.iter().map(f64::to_string).collect();
            out.push_str(&format!(r#" stroke-dasharray="{}""#, dashes.join(" ")));
            if style.dash_offset != 0.0 {
                out.push_str(&format!(r#" stroke-dashoffset="{}""#, style.dash_offset));
            }
        }
        out.push_str("/>");
        self.lines.push(out);
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}
