//! trendline-rs: headless chart core and route tables for the parking
//! dashboards.
//!
//! The chart side turns a yearly population series into a monotone SVG
//! trend line with a hover tooltip; the routing side resolves navigated
//! paths against the dashboards' static page tables.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod routing;
pub mod telemetry;

pub use api::{TrendChart, TrendChartConfig};
pub use error::{ChartError, ChartResult};
