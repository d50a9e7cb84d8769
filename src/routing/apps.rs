//! Route tables of the two dashboard apps.

use serde::{Deserialize, Serialize};

use super::{Route, RouteTable};
use crate::error::ChartResult;

/// Page views of the SpotShare dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotShareView {
    Dashboard,
    FindParking,
    Trends,
    History,
    EcoScore,
}

/// Views of the legacy parking-availability app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegacyView {
    GoogleMap,
    ParkingBarChart,
}

/// `/` redirects to `/dashboard`; five page views.
pub fn spotshare_routes() -> ChartResult<RouteTable<SpotShareView>> {
    RouteTable::new(vec![
        Route::redirect("/", "/dashboard"),
        Route::component("/dashboard", SpotShareView::Dashboard),
        Route::component("/find-parking", SpotShareView::FindParking),
        Route::component("/trends", SpotShareView::Trends),
        Route::component("/history", SpotShareView::History),
        Route::component("/eco-score", SpotShareView::EcoScore),
    ])
}

/// `/` shows the map (`Home`), `/chart` the bar chart (`Chart`).
pub fn legacy_routes() -> ChartResult<RouteTable<LegacyView>> {
    RouteTable::new(vec![
        Route::component("/", LegacyView::GoogleMap).named("Home"),
        Route::component("/chart", LegacyView::ParkingBarChart).named("Chart"),
    ])
}
