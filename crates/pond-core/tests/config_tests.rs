use pond_core::{
    RevealMode, ScrollMode, SiteConfig, SiteState, LAZY_VIDEO_ROOT_MARGIN, REVEAL_ROOT_MARGIN,
};

#[test]
fn default_thresholds() {
    let config = SiteConfig::default();
    assert_eq!(config.scroll_threshold, 50.0);
    assert_eq!(config.header_hide_threshold, 300.0);
    assert_eq!(config.hysteresis_px, 5.0);
    assert!(!config.reduced_motion);
}

#[test]
fn observer_specs() {
    let config = SiteConfig::default();
    assert_eq!(config.reveal.threshold, 0.1);
    assert_eq!(config.reveal.root_margin, REVEAL_ROOT_MARGIN);
    assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.lazy_video.threshold, 0.0);
    assert_eq!(config.lazy_video.root_margin, LAZY_VIDEO_ROOT_MARGIN);
    assert_eq!(config.lazy_video.root_margin, "200px 0px");
}

#[test]
fn reduced_motion_disables_animation() {
    let reduced = SiteConfig::with_reduced_motion(true);
    assert_eq!(reduced.scroll_mode(), ScrollMode::Auto);
    assert_eq!(reduced.reveal_mode(), RevealMode::Immediate);
    // Thresholds are unchanged
    assert_eq!(reduced.scroll_threshold, SiteConfig::default().scroll_threshold);

    let full = SiteConfig::with_reduced_motion(false);
    assert_eq!(full.scroll_mode(), ScrollMode::Smooth);
    assert_eq!(full.reveal_mode(), RevealMode::OnIntersect);
    assert_eq!(full, SiteConfig::default());
}

#[test]
fn fresh_state_on_load() {
    let state = SiteState::default();
    assert_eq!(state.header.last_scroll_y, 0.0);
    assert!(state.header.visible);
    assert!(!state.header.frame_pending());
    assert!(!state.menu.open);
    assert!(!state.audio.playing);
}
