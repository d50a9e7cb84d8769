mod chart_config;
mod hover;
mod label_format;
mod sample_source;
mod trend_chart;

pub use chart_config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, LineStyle, TooltipStyle, TrendChartConfig};
pub use hover::{HoverContext, tooltip_text};
pub use label_format::{LabelLocale, format_locale_number};
pub use sample_source::{DEFAULT_SAMPLE_RESOURCE, load_samples_from_path, parse_samples_json};
pub use trend_chart::TrendChart;

#[cfg(feature = "fetch")]
pub use sample_source::{fetch_samples, resolve_sample_url};
