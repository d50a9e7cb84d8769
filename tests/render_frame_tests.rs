use trendline_rs::api::{TrendChart, TrendChartConfig};
use trendline_rs::core::{PathCommand, Viewport, YearlyPopulationSample};
use trendline_rs::render::{
    Color, NullRenderer, PathPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[test]
fn empty_chart_renders_empty_frame() {
    let mut chart =
        TrendChart::new(NullRenderer::default(), TrendChartConfig::new(960)).expect("chart init");
    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.is_empty());

    chart.render().expect("render");
    assert_eq!(chart.renderer().last_path_count, 0);
    assert_eq!(chart.renderer().last_text_count, 0);
}

#[test]
fn frame_contains_translated_line_and_tooltip() {
    let mut chart =
        TrendChart::new(NullRenderer::default(), TrendChartConfig::new(960)).expect("chart init");
    chart
        .set_samples(vec![
            YearlyPopulationSample::new(2000, 10.0),
            YearlyPopulationSample::new(2001, 12.0),
            YearlyPopulationSample::new(2002, 15.0),
        ])
        .expect("samples");
    chart.pointer_move(40.0, 20.0);

    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.paths.len(), 1);
    assert_eq!(frame.paths[0].translate_x, 40.0);
    assert_eq!(frame.paths[0].translate_y, 20.0);
    assert_eq!(frame.paths[0].commands.len(), 3);
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].class_name.as_deref(), Some("tooltip"));

    chart.render().expect("render");
    assert_eq!(chart.renderer().last_path_count, 1);
    assert_eq!(chart.renderer().last_text_count, 1);
}

#[test]
fn invalid_primitives_fail_validation() {
    let mut renderer = NullRenderer::default();

    let bad_path = RenderFrame::new(Viewport::new(100, 100)).with_path(PathPrimitive::new(
        vec![PathCommand::MoveTo {
            x: f64::NAN,
            y: 0.0,
        }],
        1.0,
        Color::BLACK,
    ));
    assert!(renderer.render(&bad_path).is_err());

    let bad_text = RenderFrame::new(Viewport::new(100, 100)).with_text(TextPrimitive::new(
        "",
        1.0,
        1.0,
        12.0,
        Color::BLACK,
        TextHAlign::Left,
    ));
    assert!(renderer.render(&bad_text).is_err());

    let bad_color = Color::rgba(0.0, 0.0, 0.0, 1.5);
    assert!(bad_color.validate().is_err());
}

#[test]
fn resize_rebuilds_scales() {
    let mut chart =
        TrendChart::new(NullRenderer::default(), TrendChartConfig::new(960)).expect("chart init");
    chart
        .set_samples(vec![
            YearlyPopulationSample::new(2000, 10.0),
            YearlyPopulationSample::new(2010, 20.0),
        ])
        .expect("samples");

    chart.resize(Viewport::new(470, 200)).expect("resize");
    assert_eq!(chart.plot_area().width, 400.0);
    assert_eq!(chart.map_year_to_pixel(2010.0).expect("x"), 400.0);
    assert!(chart.resize(Viewport::new(50, 200)).is_err());
    // A rejected resize keeps the previous layout.
    assert_eq!(chart.viewport(), Viewport::new(470, 200));
}
