use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea, SampleSet};
use crate::error::{ChartError, ChartResult};

/// Tuning for the value-axis headroom and degenerate-domain widening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendScaleTuning {
    /// Multiplier applied to the smallest value for the bottom of the domain.
    pub value_floor_ratio: f64,
    /// Multiplier applied to the largest value for the top of the domain.
    pub value_ceiling_ratio: f64,
    /// Span used when all years coincide.
    pub min_year_span: f64,
    /// Span used when the padded value domain collapses to a point.
    pub min_value_span: f64,
}

impl Default for TrendScaleTuning {
    fn default() -> Self {
        Self {
            value_floor_ratio: 0.98,
            value_ceiling_ratio: 1.02,
            min_year_span: 1.0,
            min_value_span: 1.0,
        }
    }
}

impl TrendScaleTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.value_floor_ratio.is_finite() || !self.value_ceiling_ratio.is_finite() {
            return Err(ChartError::InvalidData(
                "value padding ratios must be finite".to_owned(),
            ));
        }
        if !self.min_year_span.is_finite()
            || self.min_year_span <= 0.0
            || !self.min_value_span.is_finite()
            || self.min_value_span <= 0.0
        {
            return Err(ChartError::InvalidData(
                "minimum scale spans must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// The pair of scales shared by line projection and hover resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub plot: PlotArea,
}

impl TrendScales {
    pub fn from_samples(samples: &SampleSet, plot: PlotArea) -> ChartResult<Self> {
        Self::from_samples_tuned(samples, plot, TrendScaleTuning::default())
    }

    /// Builds `year -> [0, width]` and `value -> [height, 0]`.
    pub fn from_samples_tuned(
        samples: &SampleSet,
        plot: PlotArea,
        tuning: TrendScaleTuning,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        let (first_year, last_year) = samples.year_extent().ok_or(ChartError::EmptyDataset)?;
        let (min_value, max_value) = samples.value_extent().ok_or(ChartError::EmptyDataset)?;

        let year_domain = widen_if_flat(
            f64::from(first_year),
            f64::from(last_year),
            tuning.min_year_span,
        );
        let value_domain = widen_if_flat(
            min_value * tuning.value_floor_ratio,
            max_value * tuning.value_ceiling_ratio,
            tuning.min_value_span,
        );

        Ok(Self {
            x: LinearScale::new(year_domain, (0.0, plot.width))?,
            y: LinearScale::new(value_domain, (plot.height, 0.0))?,
            plot,
        })
    }

    pub fn project(self, year: i32, value: f64) -> ChartResult<(f64, f64)> {
        Ok((
            self.x.domain_to_pixel(f64::from(year))?,
            self.y.domain_to_pixel(value)?,
        ))
    }
}

fn widen_if_flat(start: f64, end: f64, min_span: f64) -> (f64, f64) {
    if start == end {
        let half = min_span / 2.0;
        return (start - half, end + half);
    }
    (start, end)
}
