use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use trendline_rs::api::{LabelLocale, TrendChart, TrendChartConfig, load_samples_from_path};
use trendline_rs::core::Viewport;
use trendline_rs::routing::{RouteResolution, legacy_routes, spotshare_routes};

#[derive(Parser)]
#[command(name = "trendline-svg")]
#[command(about = "Render the Melbourne trend line or resolve dashboard routes")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the trend chart to SVG
    Chart {
        /// Sample file (`melbourne_trend.json` layout)
        #[arg(short, long, default_value = "melbourne_trend.json")]
        input: PathBuf,

        /// Optional chart config JSON; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Surface width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Surface height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Simulate a pointer at this surface x before rendering
        #[arg(long)]
        hover_x: Option<f64>,

        #[arg(long, value_enum)]
        locale: Option<LocaleArg>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Resolve a path against one of the dashboard route tables
    Route {
        path: String,

        #[arg(long, value_enum, default_value = "spotshare")]
        app: AppArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LocaleArg {
    EnUs,
    EsEs,
}

#[derive(Clone, Copy, ValueEnum)]
enum AppArg {
    Spotshare,
    Legacy,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = trendline_rs::telemetry::init_default_tracing();
    let args = Args::parse();

    match args.command {
        Command::Chart {
            input,
            config,
            width,
            height,
            hover_x,
            locale,
            output,
        } => {
            let mut chart_config = match config {
                Some(path) => TrendChartConfig::from_json_str(&fs::read_to_string(path)?)?,
                None => TrendChartConfig::default(),
            };
            if width.is_some() || height.is_some() {
                let current = chart_config.viewport;
                chart_config = chart_config.with_viewport(Viewport::new(
                    width.unwrap_or(current.width),
                    height.unwrap_or(current.height),
                ));
            }
            if let Some(locale) = locale {
                chart_config = chart_config.with_locale(match locale {
                    LocaleArg::EnUs => LabelLocale::EnUs,
                    LocaleArg::EsEs => LabelLocale::EsEs,
                });
            }

            let mut chart = TrendChart::svg(chart_config)?;
            chart.set_samples(load_samples_from_path(&input)?)?;
            if let Some(x) = hover_x {
                match chart.pointer_move(x, 0.0) {
                    Some(label) => tracing::info!(text = %label.text, "tooltip shown"),
                    None => tracing::info!(x, "no sample under pointer"),
                }
            }
            chart.render()?;

            let document = chart.into_renderer().into_document();
            match output {
                Some(path) => fs::write(path, document)?,
                None => print!("{document}"),
            }
        }
        Command::Route { path, app } => {
            let line = match app {
                AppArg::Spotshare => describe(spotshare_routes()?.resolve(&path)),
                AppArg::Legacy => describe(legacy_routes()?.resolve(&path)),
            };
            println!("{line}");
        }
    }

    Ok(())
}

fn describe<C: std::fmt::Debug>(resolution: RouteResolution<'_, C>) -> String {
    match resolution {
        RouteResolution::Matched {
            route,
            component,
            redirected_from,
        } => match redirected_from {
            Some(from) => format!("{from} -> {} => {component:?}", route.path),
            None => format!("{} => {component:?}", route.path),
        },
        RouteResolution::NotFound { path } => format!("{path} => not found"),
    }
}
