// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw passes and the per-redraw hook.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::border::collect_scale_border;
use crate::defaults::OrientationDefaults;
use crate::grid_lines::emit_grid_lines;
use crate::resolve::{ResolvedStroke, draw_borders, resolve_borders};
use crate::scale::GridScale;
use crate::segment::BorderBuffer;
use crate::style::GridDefaults;
use crate::surface::Surface;

/// State for drawing the grid of one chart.
///
/// A pass has two phases. [`GridPass::add_scale`] runs once per scale: interior gridlines are
/// stroked right away and border candidates are buffered. [`GridPass::finish`] then resolves
/// the buffered candidates and strokes the survivors. Each chart redraw gets its own pass.
#[derive(Debug)]
pub struct GridPass<'a> {
    area: Rect,
    fallback: &'a GridDefaults,
    defaults: OrientationDefaults,
    buffer: BorderBuffer,
}

impl<'a> GridPass<'a> {
    /// Starts a pass over the chart area `area`.
    pub fn new(area: Rect, fallback: &'a GridDefaults) -> Self {
        Self {
            area,
            fallback,
            defaults: OrientationDefaults::new(),
            buffer: BorderBuffer::new(),
        }
    }

    /// Emits the gridlines of `scale` and buffers its border candidates.
    ///
    /// Hidden scales (`display == false`) are skipped entirely.
    pub fn add_scale<S, Su>(&mut self, scale: &S, surface: &mut Su)
    where
        S: GridScale + ?Sized,
        Su: Surface + ?Sized,
    {
        if !scale.options().display {
            tracing::trace!(position = ?scale.position(), "skipping hidden scale");
            return;
        }
        emit_grid_lines(
            scale,
            self.area,
            self.fallback,
            &mut self.defaults,
            &mut self.buffer,
            surface,
        );
        self.buffer
            .push(collect_scale_border(scale, self.area, self.fallback));
    }

    /// Border candidates buffered so far.
    pub fn buffer(&self) -> &BorderBuffer {
        &self.buffer
    }

    /// Orientation defaults claimed so far.
    pub fn orientation_defaults(&self) -> &OrientationDefaults {
        &self.defaults
    }

    /// Resolves the buffered borders without drawing them.
    pub fn resolve(self) -> Vec<ResolvedStroke> {
        let defaults = self.defaults.finalize(self.fallback);
        resolve_borders(&self.buffer, &defaults)
    }

    /// Resolves the buffered borders and strokes them.
    pub fn finish<Su>(self, surface: &mut Su)
    where
        Su: Surface + ?Sized,
    {
        let defaults = self.defaults.finalize(self.fallback);
        draw_borders(&self.buffer, &defaults, surface);
    }
}

/// The gridline renderer a chart calls before drawing its datasets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    defaults: GridDefaults,
}

impl GridLines {
    /// Creates a renderer with the given fallback styles.
    pub fn new(defaults: GridDefaults) -> Self {
        Self { defaults }
    }

    /// The fallback styles.
    pub fn defaults(&self) -> &GridDefaults {
        &self.defaults
    }

    /// Draws gridlines and chart-area borders for `scales` onto `surface`.
    ///
    /// Scales are processed in slice order, which decides who claims the undefined border
    /// style of each direction. Charts whose first scale is radial are left alone.
    ///
    /// Mixed scale types can be passed as `&[&dyn GridScale]`.
    pub fn before_datasets_draw<S, Su>(&self, area: Rect, scales: &[S], surface: &mut Su)
    where
        S: GridScale,
        Su: Surface + ?Sized,
    {
        if scales
            .first()
            .is_some_and(|scale| scale.options().kind.is_radial())
        {
            tracing::debug!("primary scale is radial; skipping grid lines");
            return;
        }

        let mut pass = GridPass::new(area, &self.defaults);
        for scale in scales {
            pass.add_scale(scale, surface);
        }
        tracing::debug!(
            scales = scales.len(),
            border_candidates = pass.buffer().len(),
            "grid lines emitted"
        );
        pass.finish(surface);
    }
}
