use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::label_format::{SiLabelFormatter, TickLabelFormatter};
use crate::error::{PlotError, PlotResult};

/// Reference length in drawing units (one inch at 72 units per inch).
pub const REFERENCE_UNIT: f64 = 72.0;
/// Preferred distance between adjacent minor ticks.
pub const TARGET_MINOR_TICK_PITCH: f64 = REFERENCE_UNIT / 5.0;
/// Preferred distance between adjacent labels.
pub const TARGET_LABEL_PITCH: f64 = REFERENCE_UNIT;
/// Axis length assumed when the caller passes a zero width hint.
pub const DEFAULT_AXIS_WIDTH: f64 = 800.0;
/// Largest accepted width hint; the tick count grows linearly with width.
pub const MAX_AXIS_WIDTH: f64 = 1.0e6;

// Tick indices are multiplied back into f64 values; beyond 2^53 that stops
// being exact.
const MAX_EXACT_TICK_INDEX: f64 = 9_007_199_254_740_992.0;

/// Number of minor steps between labelled ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MajorInterval {
    Two,
    Five,
    Ten,
}

impl MajorInterval {
    #[must_use]
    pub fn steps(self) -> i64 {
        match self {
            Self::Two => 2,
            Self::Five => 5,
            Self::Ten => 10,
        }
    }

    /// Snaps a rounded target step count onto the 2/5/10 cadence.
    #[must_use]
    pub fn nearest(target_steps: f64) -> Self {
        if target_steps > 5.0 {
            Self::Ten
        } else if target_steps > 2.0 {
            Self::Five
        } else {
            Self::Two
        }
    }
}

/// One gridline; only major ticks carry a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: Option<String>,
}

impl Tick {
    #[must_use]
    pub fn minor(value: f64) -> Self {
        Self { value, label: None }
    }

    #[must_use]
    pub fn major(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }

    #[must_use]
    pub fn is_major(&self) -> bool {
        self.label.is_some()
    }
}

/// Spacing decisions behind a non-degenerate tick plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickGrid {
    /// Always an integral power of ten.
    pub minor_spacing: f64,
    pub major_interval: MajorInterval,
    pub min_index: i64,
    pub max_index: i64,
}

impl TickGrid {
    #[must_use]
    pub fn tick_count(&self) -> usize {
        usize::try_from(self.max_index - self.min_index + 1).unwrap_or(0)
    }

    #[must_use]
    pub fn value_at(&self, index: i64) -> f64 {
        index as f64 * self.minor_spacing
    }

    #[must_use]
    pub fn is_major_index(&self, index: i64) -> bool {
        index % self.major_interval.steps() == 0
    }
}

/// Ascending ticks covering a requested range.
///
/// `grid` is `None` for a zero-width range, which yields exactly one labelled
/// tick at the range value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub ticks: Vec<Tick>,
    pub grid: Option<TickGrid>,
}

impl TickPlan {
    #[must_use]
    pub fn minor_spacing(&self) -> Option<f64> {
        self.grid.map(|grid| grid.minor_spacing)
    }

    #[must_use]
    pub fn major_interval(&self) -> Option<MajorInterval> {
        self.grid.map(|grid| grid.major_interval)
    }

    pub fn major_ticks(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|tick| tick.is_major())
    }

    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let first = self.ticks.first()?;
        let last = self.ticks.last()?;
        Some((first.value, last.value))
    }
}

fn power_of_ten(exponent: i32) -> f64 {
    if exponent >= 0 {
        10_f64.powi(exponent)
    } else {
        1.0 / 10_f64.powi(-exponent)
    }
}

fn validate_tick_request(min: f64, max: f64, width_hint: f64) -> PlotResult<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(PlotError::InvalidRange { min, max });
    }
    if !(0.0..=MAX_AXIS_WIDTH).contains(&width_hint) {
        return Err(PlotError::InvalidData(format!(
            "tick width hint must be finite and in [0, {MAX_AXIS_WIDTH}], got {width_hint}"
        )));
    }
    Ok(())
}

/// Picks the power-of-ten minor spacing and the 2/5/10 major cadence for a
/// non-empty range `min < max` drawn across `width` drawing units.
pub fn select_tick_grid(min: f64, max: f64, width: f64) -> PlotResult<TickGrid> {
    let target_tick_count = width / TARGET_MINOR_TICK_PITCH;
    let target_spacing = (max - min) / target_tick_count;
    let exponent = target_spacing.log10().round();
    if !exponent.is_finite() {
        return Err(PlotError::InvalidRange { min, max });
    }
    let minor_spacing = power_of_ten(exponent as i32);
    let minor_tick_count = (max - min) / minor_spacing;

    let target_major_count = width / TARGET_LABEL_PITCH;
    let target_major_interval = (minor_tick_count / target_major_count).round();
    let major_interval = MajorInterval::nearest(target_major_interval);

    let min_index = (min / minor_spacing).floor();
    let max_index = (max / minor_spacing).ceil();
    if min_index.abs() > MAX_EXACT_TICK_INDEX || max_index.abs() > MAX_EXACT_TICK_INDEX {
        return Err(PlotError::InvalidRange { min, max });
    }

    Ok(TickGrid {
        minor_spacing,
        major_interval,
        min_index: min_index as i64,
        max_index: max_index as i64,
    })
}

/// Plans axis ticks for `[min, max]` with SI-prefixed major labels.
///
/// A `width_hint` of zero means "unknown" and falls back to
/// [`DEFAULT_AXIS_WIDTH`].
pub fn plan_ticks(min: f64, max: f64, width_hint: f64) -> PlotResult<TickPlan> {
    plan_ticks_with_formatter(min, max, width_hint, &SiLabelFormatter)
}

pub fn plan_ticks_with_formatter(
    min: f64,
    max: f64,
    width_hint: f64,
    formatter: &dyn TickLabelFormatter,
) -> PlotResult<TickPlan> {
    validate_tick_request(min, max, width_hint)?;

    if min == max {
        return Ok(TickPlan {
            ticks: vec![Tick::major(min, formatter.format(min))],
            grid: None,
        });
    }

    let width = if width_hint == 0.0 {
        DEFAULT_AXIS_WIDTH
    } else {
        width_hint
    };
    let grid = select_tick_grid(min, max, width)?;

    debug!(
        min,
        max,
        width,
        minor_spacing = grid.minor_spacing,
        major_interval = grid.major_interval.steps(),
        tick_count = grid.tick_count(),
        "planned axis ticks"
    );

    let ticks = (grid.min_index..=grid.max_index)
        .map(|index| {
            let value = grid.value_at(index);
            if grid.is_major_index(index) {
                Tick::major(value, formatter.format(value))
            } else {
                Tick::minor(value)
            }
        })
        .collect();

    Ok(TickPlan {
        ticks,
        grid: Some(grid),
    })
}
