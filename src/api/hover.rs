use tracing::trace;

use crate::core::{Margins, SampleSet, TrendScales, YearlyPopulationSample};
use crate::interaction::TooltipLabel;

use super::{LabelLocale, TooltipStyle, format_locale_number};

/// Everything the pointer handler needs, owned in one place.
///
/// Built whenever samples or layout change, so the handler never reads
/// stale scales.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverContext {
    samples: SampleSet,
    scales: TrendScales,
    margins: Margins,
}

impl HoverContext {
    #[must_use]
    pub fn new(samples: SampleSet, scales: TrendScales, margins: Margins) -> Self {
        Self {
            samples,
            scales,
            margins,
        }
    }

    #[must_use]
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    #[must_use]
    pub fn scales(&self) -> TrendScales {
        self.scales
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Year under a surface-space pointer x, rounded half toward +∞.
    ///
    /// A single-year series maps every pointer onto that year. Returns
    /// `None` for non-finite pointers or years outside `i32`.
    #[must_use]
    pub fn candidate_year(&self, pointer_x: f64) -> Option<i32> {
        if !pointer_x.is_finite() {
            return None;
        }
        if let Some((first, last)) = self.samples.year_extent() {
            if first == last {
                return Some(first);
            }
        }
        let year = self
            .scales
            .x
            .pixel_to_domain(pointer_x - self.margins.left)
            .ok()?;
        let rounded = (year + 0.5).floor();
        if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
            return None;
        }
        Some(rounded as i32)
    }

    /// Exact-year sample under the pointer, if any.
    #[must_use]
    pub fn sample_at(&self, pointer_x: f64) -> Option<&YearlyPopulationSample> {
        let year = self.candidate_year(pointer_x)?;
        let hit = self.samples.find_year(year);
        trace!(pointer_x, year, hit = hit.is_some(), "hover lookup");
        hit
    }

    /// Builds the tooltip for a pointer position, or `None` on a miss.
    #[must_use]
    pub fn resolve_tooltip(
        &self,
        pointer_x: f64,
        style: &TooltipStyle,
        locale: LabelLocale,
    ) -> Option<TooltipLabel> {
        let sample = self.sample_at(pointer_x)?;
        Some(TooltipLabel {
            text: tooltip_text(&style.icon, sample, locale),
            year: sample.year,
            value: sample.greater_melbourne,
            x: pointer_x,
            y: style.y,
        })
    }
}

/// `"{icon} {year}: {value}"`, with the icon omitted when empty.
#[must_use]
pub fn tooltip_text(icon: &str, sample: &YearlyPopulationSample, locale: LabelLocale) -> String {
    let value = format_locale_number(sample.greater_melbourne, locale);
    if icon.is_empty() {
        format!("{}: {value}", sample.year)
    } else {
        format!("{icon} {}: {value}", sample.year)
    }
}
