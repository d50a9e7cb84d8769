pub mod monotone;
pub mod sample;
pub mod scale;
pub mod trend_scales;
pub mod types;

pub use monotone::{PathCommand, monotone_x_path, to_svg_path_data};
pub use sample::{SampleSet, YearlyPopulationSample};
pub use scale::LinearScale;
pub use trend_scales::{TrendScaleTuning, TrendScales};
pub use types::{Margins, PlotArea, Viewport};
