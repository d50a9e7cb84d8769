use approx::assert_relative_eq;
use trendline_rs::core::{
    PlotArea, SampleSet, TrendScaleTuning, TrendScales, YearlyPopulationSample,
};
use trendline_rs::ChartError;

fn plot() -> PlotArea {
    PlotArea {
        width: 890.0,
        height: 150.0,
    }
}

#[test]
fn value_domain_is_padded_two_percent_each_side() {
    let set = SampleSet::try_from_samples(vec![
        YearlyPopulationSample::new(2000, 3_000_000.0),
        YearlyPopulationSample::new(2010, 4_000_000.0),
    ])
    .expect("samples");
    let scales = TrendScales::from_samples(&set, plot()).expect("scales");

    let (min, max) = scales.y.domain();
    assert_relative_eq!(min, 2_940_000.0, max_relative = 1e-12);
    assert_relative_eq!(max, 4_080_000.0, max_relative = 1e-12);
    assert_eq!(scales.y.range(), (150.0, 0.0));
    assert_eq!(scales.x.domain(), (2000.0, 2010.0));
    assert_eq!(scales.x.range(), (0.0, 890.0));
}

#[test]
fn unsorted_input_is_sorted_on_load() {
    let set = SampleSet::try_from_samples(vec![
        YearlyPopulationSample::new(2010, 4.0),
        YearlyPopulationSample::new(1990, 2.0),
        YearlyPopulationSample::new(2000, 3.0),
    ])
    .expect("samples");
    let years: Vec<i32> = set.as_slice().iter().map(|s| s.year).collect();
    assert_eq!(years, vec![1990, 2000, 2010]);

    let scales = TrendScales::from_samples(&set, plot()).expect("scales");
    assert_eq!(scales.x.domain(), (1990.0, 2010.0));
}

#[test]
fn single_sample_widens_year_domain() {
    let set = SampleSet::try_from_samples(vec![YearlyPopulationSample::new(2020, 5_000_000.0)])
        .expect("samples");
    let scales = TrendScales::from_samples(&set, plot()).expect("scales");

    assert_eq!(scales.x.domain(), (2019.5, 2020.5));
    let x = scales.x.domain_to_pixel(2020.0).expect("x");
    assert_relative_eq!(x, 445.0);
}

#[test]
fn all_zero_values_widen_value_domain() {
    let set = SampleSet::try_from_samples(vec![
        YearlyPopulationSample::new(2000, 0.0),
        YearlyPopulationSample::new(2001, 0.0),
    ])
    .expect("samples");
    let scales = TrendScales::from_samples(&set, plot()).expect("scales");
    assert_eq!(scales.y.domain(), (-0.5, 0.5));
}

#[test]
fn empty_dataset_is_rejected() {
    let err = SampleSet::try_from_samples(Vec::new()).expect_err("empty");
    assert!(matches!(err, ChartError::EmptyDataset));

    let err = TrendScales::from_samples(&SampleSet::default(), plot()).expect_err("empty");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn non_finite_values_are_dropped() {
    let set = SampleSet::try_from_samples(vec![
        YearlyPopulationSample::new(2000, f64::NAN),
        YearlyPopulationSample::new(2001, 10.0),
    ])
    .expect("samples");
    assert_eq!(set.len(), 1);
    assert!(set.find_year(2000).is_none());
}

#[test]
fn tuned_padding_is_applied() {
    let set = SampleSet::try_from_samples(vec![
        YearlyPopulationSample::new(2000, 100.0),
        YearlyPopulationSample::new(2001, 200.0),
    ])
    .expect("samples");
    let tuning = TrendScaleTuning {
        value_floor_ratio: 0.5,
        value_ceiling_ratio: 1.5,
        ..TrendScaleTuning::default()
    };
    let scales = TrendScales::from_samples_tuned(&set, plot(), tuning).expect("scales");
    assert_eq!(scales.y.domain(), (50.0, 300.0));

    let bad = TrendScaleTuning {
        min_year_span: 0.0,
        ..TrendScaleTuning::default()
    };
    assert!(TrendScales::from_samples_tuned(&set, plot(), bad).is_err());
}
