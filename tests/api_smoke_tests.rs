use approx::assert_relative_eq;
use trendline_rs::api::{TrendChart, TrendChartConfig};
use trendline_rs::core::YearlyPopulationSample;
use trendline_rs::render::NullRenderer;
use trendline_rs::routing::{Router, spotshare_routes};

#[test]
fn chart_smoke_flow() {
    let mut chart =
        TrendChart::new(NullRenderer::default(), TrendChartConfig::new(960)).expect("chart init");

    chart
        .set_samples(vec![
            YearlyPopulationSample::new(2016, 4_714_393.0),
            YearlyPopulationSample::new(2001, 3_471_625.0),
            YearlyPopulationSample::new(2011, 4_169_366.0),
            YearlyPopulationSample::new(2006, 3_743_015.0),
        ])
        .expect("samples");
    assert_eq!(chart.samples().first().map(|s| s.year), Some(2001));

    let x_px = chart.map_year_to_pixel(2011.0).expect("x to pixel");
    let year = chart.map_pixel_to_year(x_px).expect("pixel to x");
    assert_relative_eq!(year, 2011.0, epsilon = 1e-9);

    let y_px = chart.map_value_to_pixel(4_169_366.0).expect("value to pixel");
    let value = chart.map_pixel_to_value(y_px).expect("pixel to value");
    assert_relative_eq!(value, 4_169_366.0, max_relative = 1e-12);

    let label = chart
        .pointer_move(40.0 + x_px, 100.0)
        .expect("tooltip over 2011");
    assert_eq!(label.text, "📈 2011: 4,169,366");

    chart.render().expect("render");
    assert_eq!(chart.renderer().last_path_count, 1);
    assert_eq!(chart.renderer().last_text_count, 1);

    let path = chart.line_path_data().expect("path");
    assert!(path.starts_with("M0,"));
    assert_eq!(path.matches('C').count(), 3);
}

#[test]
fn scale_queries_fail_before_data() {
    let chart =
        TrendChart::new(NullRenderer::default(), TrendChartConfig::new(960)).expect("chart init");
    assert!(chart.map_year_to_pixel(2000.0).is_err());
    assert!(chart.line_path().expect("path").is_empty());
}

#[test]
fn router_smoke_flow() {
    let mut router = Router::new(spotshare_routes().expect("routes"), "/");
    assert_eq!(router.current_path(), "/dashboard");
    assert!(router.push("/unknown").is_not_found());
    assert!(router.back().is_some());
}
