use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::YearlyPopulationSample;
use crate::error::ChartResult;

/// File name the dashboard page requests next to itself.
pub const DEFAULT_SAMPLE_RESOURCE: &str = "melbourne_trend.json";

/// Parses a JSON array of `{ year, greaterMelbourne }` rows.
pub fn parse_samples_json(input: &str) -> ChartResult<Vec<YearlyPopulationSample>> {
    let samples: Vec<YearlyPopulationSample> = serde_json::from_str(input)?;
    debug!(count = samples.len(), "parsed yearly samples");
    Ok(samples)
}

pub fn load_samples_from_path(path: impl AsRef<Path>) -> ChartResult<Vec<YearlyPopulationSample>> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = input.len(), "read sample file");
    parse_samples_json(&input)
}

/// Resolves `resource` against the page origin, like a relative fetch.
#[cfg(feature = "fetch")]
pub fn resolve_sample_url(page_url: &str, resource: &str) -> ChartResult<url::Url> {
    let base = url::Url::parse(page_url).map_err(|err| {
        crate::error::ChartError::InvalidData(format!("invalid page url `{page_url}`: {err}"))
    })?;
    base.join(resource).map_err(|err| {
        crate::error::ChartError::InvalidData(format!("invalid sample resource `{resource}`: {err}"))
    })
}

/// Single unauthenticated GET of the sample file. No retry.
#[cfg(feature = "fetch")]
pub fn fetch_samples(url: &url::Url) -> ChartResult<Vec<YearlyPopulationSample>> {
    use crate::error::ChartError;

    debug!(%url, "fetching sample file");
    let response = reqwest::blocking::get(url.as_str())
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|err| ChartError::Fetch(err.to_string()))?;
    let body = response
        .text()
        .map_err(|err| ChartError::Fetch(err.to_string()))?;
    parse_samples_json(&body)
}
