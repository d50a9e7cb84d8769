use tracing::{debug, trace};

use crate::core::{
    PathCommand, PlotArea, SampleSet, TrendScales, Viewport, YearlyPopulationSample,
    monotone_x_path, to_svg_path_data,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{TooltipLabel, TooltipState};
use crate::render::{
    PathPrimitive, RenderFrame, Renderer, SvgRenderer, TextHAlign, TextPrimitive,
};

use super::{HoverContext, TrendChartConfig, parse_samples_json};

/// Trend-line chart facade consumed by host applications.
///
/// `TrendChart` owns the sample set, the derived scales (through
/// [`HoverContext`]), tooltip state and the renderer. Until samples are set
/// the chart draws an empty surface and ignores pointer input.
pub struct TrendChart<R: Renderer> {
    renderer: R,
    config: TrendChartConfig,
    plot: PlotArea,
    hover: Option<HoverContext>,
    tooltip: TooltipState,
}

impl TrendChart<SvgRenderer> {
    /// SVG chart whose root element takes `config.document`.
    pub fn svg(config: TrendChartConfig) -> ChartResult<Self> {
        let renderer = SvgRenderer::new(config.document.clone());
        Self::new(renderer, config)
    }
}

impl<R: Renderer> TrendChart<R> {
    pub fn new(renderer: R, config: TrendChartConfig) -> ChartResult<Self> {
        let plot = config.validate()?;
        Ok(Self {
            renderer,
            config,
            plot,
            hover: None,
            tooltip: TooltipState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &TrendChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    /// Replaces the sample series. Input is sorted by year on load.
    pub fn set_samples(&mut self, samples: Vec<YearlyPopulationSample>) -> ChartResult<()> {
        let original_count = samples.len();
        let samples = SampleSet::try_from_samples(samples)?;
        let scales =
            TrendScales::from_samples_tuned(&samples, self.plot, self.config.scale_tuning)?;
        debug!(
            original_count,
            canonical_count = samples.len(),
            year_domain = ?scales.x.domain(),
            value_domain = ?scales.y.domain(),
            "set yearly samples"
        );
        self.hover = Some(HoverContext::new(samples, scales, self.config.margins));
        self.tooltip.clear();
        Ok(())
    }

    /// Parses a `melbourne_trend.json` payload and sets it as the series.
    pub fn load_json_str(&mut self, input: &str) -> ChartResult<()> {
        let samples = parse_samples_json(input)?;
        self.set_samples(samples)
    }

    #[must_use]
    pub fn samples(&self) -> &[YearlyPopulationSample] {
        match &self.hover {
            Some(hover) => hover.samples().as_slice(),
            None => &[],
        }
    }

    #[must_use]
    pub fn scales(&self) -> Option<TrendScales> {
        self.hover.as_ref().map(HoverContext::scales)
    }

    #[must_use]
    pub fn hover_context(&self) -> Option<&HoverContext> {
        self.hover.as_ref()
    }

    /// Changes the surface size (e.g. on window resize) and rebuilds scales.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let plot = PlotArea::from_viewport(viewport, self.config.margins)?;
        let hover = match &self.hover {
            Some(hover) => {
                let samples = hover.samples().clone();
                let scales =
                    TrendScales::from_samples_tuned(&samples, plot, self.config.scale_tuning)?;
                Some(HoverContext::new(samples, scales, self.config.margins))
            }
            None => None,
        };
        self.config.viewport = viewport;
        self.plot = plot;
        self.hover = hover;
        self.tooltip.clear();
        debug!(width = viewport.width, height = viewport.height, "resized chart");
        Ok(())
    }

    pub fn map_year_to_pixel(&self, year: f64) -> ChartResult<f64> {
        self.require_scales()?.x.domain_to_pixel(year)
    }

    pub fn map_pixel_to_year(&self, pixel: f64) -> ChartResult<f64> {
        self.require_scales()?.x.pixel_to_domain(pixel)
    }

    pub fn map_value_to_pixel(&self, value: f64) -> ChartResult<f64> {
        self.require_scales()?.y.domain_to_pixel(value)
    }

    pub fn map_pixel_to_value(&self, pixel: f64) -> ChartResult<f64> {
        self.require_scales()?.y.pixel_to_domain(pixel)
    }

    /// Smoothed line in plot-area pixels (before the margin translation).
    pub fn line_path(&self) -> ChartResult<Vec<PathCommand>> {
        let Some(hover) = &self.hover else {
            return Ok(Vec::new());
        };
        let scales = hover.scales();
        let points = hover
            .samples()
            .as_slice()
            .iter()
            .map(|sample| scales.project(sample.year, sample.greater_melbourne))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(monotone_x_path(&points))
    }

    pub fn line_path_data(&self) -> ChartResult<String> {
        Ok(to_svg_path_data(&self.line_path()?))
    }

    /// Handles a pointer move in surface coordinates and returns the
    /// tooltip left on screen, if any.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<&TooltipLabel> {
        let label = self.hover.as_ref().and_then(|hover| {
            hover.resolve_tooltip(x, &self.config.tooltip_style, self.config.locale)
        });
        trace!(x, y, shown = label.is_some(), "pointer move");
        self.tooltip.on_pointer_move(x, y, label);
        self.tooltip.label()
    }

    pub fn pointer_leave(&mut self) {
        trace!("pointer leave");
        self.tooltip.on_pointer_leave();
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipLabel> {
        self.tooltip.label()
    }

    #[must_use]
    pub fn tooltip_state(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);

        let commands = self.line_path()?;
        if !commands.is_empty() {
            let style = self.config.line_style;
            frame = frame.with_path(
                PathPrimitive::new(commands, style.stroke_width, style.color)
                    .translated(self.config.margins.left, self.config.margins.top),
            );
        }

        if let Some(label) = self.tooltip.label() {
            let style = &self.config.tooltip_style;
            frame = frame.with_text(
                TextPrimitive::new(
                    label.text.clone(),
                    label.x,
                    label.y,
                    style.font_size_px,
                    style.color,
                    TextHAlign::Left,
                )
                .with_class(style.class_name.clone()),
            );
        }

        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn require_scales(&self) -> ChartResult<TrendScales> {
        self.scales().ok_or(ChartError::EmptyDataset)
    }
}
