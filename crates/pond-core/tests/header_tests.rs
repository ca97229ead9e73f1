use pond_core::{HeaderState, HeaderView, SiteConfig};

fn run(samples: &[f64]) -> (HeaderState, Vec<HeaderView>) {
    let config = SiteConfig::default();
    let mut state = HeaderState::default();
    let views = samples
        .iter()
        .map(|&y| state.update(y, &config))
        .collect::<Vec<_>>();
    (state, views)
}

#[test]
fn scrolled_class_tracks_threshold() {
    let (_, views) = run(&[0.0, 50.0, 50.5, 120.0, 49.0]);
    let scrolled: Vec<bool> = views.iter().map(|v| v.scrolled).collect();
    assert_eq!(scrolled, vec![false, false, true, true, false]);
}

#[test]
fn header_never_hides_below_hide_threshold() {
    // Large downward jumps, but never past 300px
    let (state, views) = run(&[0.0, 100.0, 200.0, 300.0]);
    assert!(views.iter().all(|v| !v.hidden));
    assert!(state.visible);
}

#[test]
fn header_hides_on_downward_scroll_past_threshold() {
    let (state, views) = run(&[0.0, 290.0, 320.0]);
    assert!(!views[1].hidden);
    assert!(views[2].hidden);
    assert!(!state.visible);
}

#[test]
fn small_deltas_inside_hysteresis_band_do_not_flip() {
    // Deltas under +5 never hide, even past the hide threshold
    let (_, views) = run(&[298.0, 302.0, 306.0]);
    assert!(views.iter().all(|v| !v.hidden));

    // Once hidden, -5 exactly is not enough to show
    let (_, views) = run(&[290.0, 320.0, 315.0, 310.0]);
    assert!(views[1].hidden);
    assert!(views[2].hidden);
    assert!(views[3].hidden);
}

#[test]
fn header_reappears_on_upward_scroll() {
    let (state, views) = run(&[400.0, 500.0, 494.0]);
    assert!(views[1].hidden);
    assert!(!views[2].hidden);
    assert!(state.visible);
}

#[test]
fn returning_below_threshold_always_shows() {
    let (_, views) = run(&[400.0, 500.0, 298.0]);
    assert!(views[1].hidden);
    assert!(!views[2].hidden);
    assert!(views[2].scrolled);
}

#[test]
fn last_sample_is_recorded() {
    let (state, _) = run(&[10.0, 333.0]);
    assert_eq!(state.last_scroll_y, 333.0);
}

#[test]
fn frame_guard_allows_one_request_per_burst() {
    let config = SiteConfig::default();
    let mut state = HeaderState::default();
    assert!(!state.frame_pending());
    assert!(state.request_frame());
    assert!(!state.request_frame());
    assert!(!state.request_frame());
    assert!(state.frame_pending());

    // The frame runs and releases the guard
    state.update(80.0, &config);
    assert!(!state.frame_pending());
    assert!(state.request_frame());
}
