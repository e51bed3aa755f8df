// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON chart descriptions.
//!
//! ```json
//! {
//!   "area": [40, 20, 340, 180],
//!   "scales": [
//!     { "position": "bottom", "bounds": [40, 180, 340, 200], "ticks": { "pixels": [40, 140, 240, 340] } },
//!     {
//!       "position": "left",
//!       "bounds": [0, 20, 40, 180],
//!       "ticks": { "linear": { "domain": [-40, 40], "count": 4 } },
//!       "options": { "border": { "display": true, "color": "black", "lineWidth": 2 } }
//!     }
//!   ]
//! }
//! ```

use gridmark::{AxisPosition, AxisScale, ScaleOptions};
use kurbo::Rect;
use serde::Deserialize;

/// A chart area and the scales around it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChartFile {
    /// Chart area as `[x0, y0, x1, y1]`.
    area: [f64; 4],
    scales: Vec<ScaleFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScaleFile {
    position: AxisPosition,
    bounds: [f64; 4],
    ticks: TickSource,
    #[serde(default)]
    options: Option<ScaleOptions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum TickSource {
    /// Tick pixel positions, in increasing order.
    Pixels(Vec<f64>),
    /// Nice ticks over a data domain.
    Linear { domain: (f64, f64), count: usize },
    /// One tick per category band.
    Categories(usize),
}

impl ChartFile {
    pub(crate) fn area(&self) -> Rect {
        rect(self.area)
    }

    /// Builds the scales in file order.
    pub(crate) fn scales(&self) -> Vec<AxisScale> {
        self.scales.iter().map(ScaleFile::build).collect()
    }
}

impl ScaleFile {
    fn build(&self) -> AxisScale {
        let bounds = rect(self.bounds);
        let scale = match &self.ticks {
            TickSource::Pixels(pixels) => AxisScale::new(self.position, bounds, pixels.clone()),
            TickSource::Linear { domain, count } => {
                AxisScale::linear(self.position, bounds, *domain, *count)
            }
            TickSource::Categories(count) => AxisScale::category(self.position, bounds, *count),
        };
        match &self.options {
            Some(options) => scale.with_options(options.clone()),
            None => scale,
        }
    }
}

fn rect([x0, y0, x1, y1]: [f64; 4]) -> Rect {
    Rect::new(x0, y0, x1, y1)
}
