use trendline_rs::ChartError;
use trendline_rs::routing::{
    LegacyView, Route, RouteResolution, RouteTable, SpotShareView, legacy_routes,
    spotshare_routes,
};

#[test]
fn spotshare_root_redirects_to_dashboard() {
    let table = spotshare_routes().expect("routes");
    match table.resolve("/") {
        RouteResolution::Matched {
            route,
            component,
            redirected_from,
        } => {
            assert_eq!(route.path, "/dashboard");
            assert_eq!(*component, SpotShareView::Dashboard);
            assert_eq!(redirected_from.as_deref(), Some("/"));
        }
        RouteResolution::NotFound { path } => panic!("unexpected miss for {path}"),
    }
}

#[test]
fn spotshare_pages_resolve_to_their_views() {
    let table = spotshare_routes().expect("routes");
    for (path, view) in [
        ("/dashboard", SpotShareView::Dashboard),
        ("/find-parking", SpotShareView::FindParking),
        ("/trends", SpotShareView::Trends),
        ("/history", SpotShareView::History),
        ("/eco-score", SpotShareView::EcoScore),
    ] {
        assert_eq!(table.resolve(path).component(), Some(&view), "{path}");
    }
}

#[test]
fn unregistered_path_is_not_found() {
    let table = spotshare_routes().expect("routes");
    let resolution = table.resolve("/does-not-exist?x=1");
    assert!(resolution.is_not_found());
    assert_eq!(resolution.path(), "/does-not-exist");
    assert_eq!(resolution.component(), None);
}

#[test]
fn matching_ignores_case_query_hash_and_trailing_slash() {
    let table = spotshare_routes().expect("routes");
    assert_eq!(
        table.resolve("/Eco-Score/?from=nav#top").component(),
        Some(&SpotShareView::EcoScore)
    );
    assert!(table.resolve("/eco-score/extra").is_not_found());
}

#[test]
fn legacy_routes_are_named() {
    let table = legacy_routes().expect("routes");
    assert_eq!(table.resolve("/").component(), Some(&LegacyView::GoogleMap));
    assert_eq!(
        table.resolve("/chart").component(),
        Some(&LegacyView::ParkingBarChart)
    );
    assert_eq!(table.by_name("Chart").map(|r| r.path.as_str()), Some("/chart"));
    assert!(table.by_name("Dashboard").is_none());
}

#[test]
fn duplicate_paths_are_rejected() {
    let err = RouteTable::new(vec![
        Route::component("/a", 1),
        Route::component("/A/", 2),
    ])
    .expect_err("duplicate");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn relative_paths_are_rejected() {
    assert!(RouteTable::new(vec![Route::component("a", 1)]).is_err());
}

#[test]
fn redirect_cycles_are_rejected() {
    let err = RouteTable::<u8>::new(vec![Route::redirect("/a", "/b"), Route::redirect("/b", "/a")])
        .expect_err("cycle");
    assert!(matches!(err, ChartError::RedirectLoop { .. }));
}

#[test]
fn redirect_to_missing_path_is_not_found() {
    let table = RouteTable::new(vec![
        Route::redirect("/", "/gone"),
        Route::component("/here", "here"),
    ])
    .expect("table");
    assert!(table.resolve("/").is_not_found());
    assert_eq!(table.resolve("/here").component(), Some(&"here"));
}
