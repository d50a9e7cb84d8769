#![cfg(feature = "cairo-backend")]

use trendline_rs::ChartError;
use trendline_rs::api::{TrendChart, TrendChartConfig};
use trendline_rs::core::YearlyPopulationSample;
use trendline_rs::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 200).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_line_and_tooltip() {
    let renderer = CairoRenderer::new(960, 200).expect("renderer");
    let mut chart = TrendChart::new(renderer, TrendChartConfig::new(960)).expect("chart init");
    chart
        .set_samples(vec![
            YearlyPopulationSample::new(2000, 3_000_000.0),
            YearlyPopulationSample::new(2005, 3_400_000.0),
            YearlyPopulationSample::new(2010, 4_000_000.0),
        ])
        .expect("samples");
    chart.pointer_move(930.0, 50.0);

    chart.render().expect("render");
    let renderer = chart.into_renderer();
    let stats = renderer.last_stats();
    assert_eq!(stats.paths_drawn, 1);
    assert_eq!(stats.texts_drawn, 1);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
