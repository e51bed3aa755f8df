// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-direction styles for undefined borders.
//!
//! Each line direction gets one style for all of its undefined borders, so the implied edges of
//! the chart area look consistent. The first scale whose gridlines run in a direction claims it;
//! directions nobody claims fall back to [`GridDefaults::grid`] when the tracker is finalized.

use crate::segment::LineDirection;
use crate::style::{GridDefaults, TickStyle};

/// Tracks which scale styles the undefined borders of each direction.
///
/// This is the accumulate-phase half. [`OrientationDefaults::finalize`] consumes it and yields
/// the read-only [`ResolvedDefaults`] used while drawing borders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrientationDefaults {
    horizontal: Option<TickStyle>,
    vertical: Option<TickStyle>,
}

impl OrientationDefaults {
    /// Creates a tracker with no claimed directions.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, direction: LineDirection) -> &mut Option<TickStyle> {
        match direction {
            LineDirection::Horizontal => &mut self.horizontal,
            LineDirection::Vertical => &mut self.vertical,
        }
    }

    /// Offers `style` for `direction`. The first offer per direction wins.
    ///
    /// Returns `true` if this call claimed the direction.
    pub fn claim(&mut self, direction: LineDirection, style: TickStyle) -> bool {
        let slot = self.slot(direction);
        if slot.is_some() {
            return false;
        }
        *slot = Some(style);
        true
    }

    /// The style claimed for `direction`, if any.
    pub fn get(&self, direction: LineDirection) -> Option<&TickStyle> {
        match direction {
            LineDirection::Horizontal => self.horizontal.as_ref(),
            LineDirection::Vertical => self.vertical.as_ref(),
        }
    }

    /// Fills unclaimed directions from `fallback.grid` and freezes the result.
    pub fn finalize(self, fallback: &GridDefaults) -> ResolvedDefaults {
        ResolvedDefaults {
            horizontal: self.horizontal.unwrap_or_else(|| fallback.grid.clone()),
            vertical: self.vertical.unwrap_or_else(|| fallback.grid.clone()),
        }
    }
}

/// Undefined-border styles for both directions, fixed for the rest of a draw pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedDefaults {
    horizontal: TickStyle,
    vertical: TickStyle,
}

impl ResolvedDefaults {
    /// The style for undefined borders running in `direction`.
    pub fn get(&self, direction: LineDirection) -> &TickStyle {
        match direction {
            LineDirection::Horizontal => &self.horizontal,
            LineDirection::Vertical => &self.vertical,
        }
    }
}
