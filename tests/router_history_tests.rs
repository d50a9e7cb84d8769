use trendline_rs::routing::{Router, SpotShareView, spotshare_routes};

fn router() -> Router<SpotShareView> {
    Router::new(spotshare_routes().expect("routes"), "/")
}

#[test]
fn initial_redirect_is_stored_as_final_path() {
    let router = router();
    assert_eq!(router.current_path(), "/dashboard");
    assert_eq!(router.current().component(), Some(&SpotShareView::Dashboard));
    assert!(!router.can_go_back());
}

#[test]
fn push_back_forward_walk_history() {
    let mut router = router();
    assert_eq!(
        router.push("/trends").component(),
        Some(&SpotShareView::Trends)
    );
    router.push("/history");

    let back = router.back().expect("back");
    assert_eq!(back.component(), Some(&SpotShareView::Trends));
    let forward = router.forward().expect("forward");
    assert_eq!(forward.component(), Some(&SpotShareView::History));
    assert!(router.forward().is_none());
}

#[test]
fn push_discards_forward_entries() {
    let mut router = router();
    router.push("/trends");
    router.push("/history");
    router.back();
    router.push("/eco-score");

    assert!(!router.can_go_forward());
    assert_eq!(router.go(-2).map(|r| r.path().to_owned()), Some("/dashboard".to_owned()));
}

#[test]
fn replace_keeps_history_depth() {
    let mut router = router();
    router.push("/trends");
    router.replace("/find-parking");
    assert_eq!(router.current().component(), Some(&SpotShareView::FindParking));

    router.back();
    assert_eq!(router.current_path(), "/dashboard");
}

#[test]
fn navigating_to_unknown_path_does_not_panic() {
    let mut router = router();
    let resolution = router.push("/nowhere");
    assert!(resolution.is_not_found());
    assert_eq!(router.current_path(), "/nowhere");

    assert_eq!(
        router.back().and_then(|r| r.component().copied()),
        Some(SpotShareView::Dashboard)
    );
    assert!(router.go(-5).is_none());
    assert!(router.go(isize::MAX).is_none());
}
