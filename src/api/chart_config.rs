use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, TrendScaleTuning, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, SvgDocumentOptions};

use super::LabelLocale;

/// Stroke of the trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub stroke_width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::STEELBLUE.with_alpha(0.2),
            stroke_width: 2.5,
        }
    }
}

/// Look and placement of the hover label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    pub icon: String,
    /// Baseline y in surface space; x always follows the pointer.
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub class_name: String,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            icon: "📈".to_owned(),
            y: 40.0,
            font_size_px: 14.0,
            color: Color::BLACK.with_alpha(0.8),
            class_name: "tooltip".to_owned(),
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so host pages can ship chart setup as JSON next to the
/// sample file. Every field defaults to the dashboard's stock look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub document: SvgDocumentOptions,
    #[serde(default)]
    pub line_style: LineStyle,
    #[serde(default)]
    pub tooltip_style: TooltipStyle,
    #[serde(default)]
    pub locale: LabelLocale,
    #[serde(default)]
    pub scale_tuning: TrendScaleTuning,
}

impl Default for TrendChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: Margins::default(),
            document: SvgDocumentOptions::default(),
            line_style: LineStyle::default(),
            tooltip_style: TooltipStyle::default(),
            locale: LabelLocale::default(),
            scale_tuning: TrendScaleTuning::default(),
        }
    }
}

impl TrendChartConfig {
    /// Default config sized to a surface of `width` × 200.
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self::default().with_viewport(Viewport::new(width, DEFAULT_HEIGHT))
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    #[must_use]
    pub fn with_tooltip_style(mut self, tooltip_style: TooltipStyle) -> Self {
        self.tooltip_style = tooltip_style;
        self
    }

    #[must_use]
    pub fn with_scale_tuning(mut self, tuning: TrendScaleTuning) -> Self {
        self.scale_tuning = tuning;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates layout and styles; returns the derived plot area.
    pub fn validate(&self) -> ChartResult<PlotArea> {
        let plot = PlotArea::from_viewport(self.viewport, self.margins)?;
        self.line_style.color.validate()?;
        if !self.line_style.stroke_width.is_finite() || self.line_style.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.tooltip_style.color.validate()?;
        if !self.tooltip_style.font_size_px.is_finite() || self.tooltip_style.font_size_px <= 0.0
        {
            return Err(ChartError::InvalidData(
                "tooltip font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.tooltip_style.y.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip y must be finite".to_owned(),
            ));
        }
        Ok(plot)
    }
}

pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 200;

fn default_viewport() -> Viewport {
    Viewport::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
}
