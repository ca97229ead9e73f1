use pond_core::{fragment_selector, scroll_target_top, AnchorError};

#[test]
fn fragment_hrefs_become_selectors() {
    assert_eq!(fragment_selector("#credits"), Ok("#credits"));
    assert_eq!(fragment_selector("#a-b_c"), Ok("#a-b_c"));
}

#[test]
fn bare_hash_is_rejected() {
    assert_eq!(fragment_selector("#"), Err(AnchorError::BareHash));
}

#[test]
fn non_fragment_hrefs_are_rejected() {
    assert_eq!(
        fragment_selector("/about#team"),
        Err(AnchorError::NotFragment("/about#team".to_string()))
    );
    assert!(matches!(
        fragment_selector(""),
        Err(AnchorError::NotFragment(_))
    ));
}

#[test]
fn target_offset_accounts_for_header() {
    // Target 400px below the viewport top, page scrolled 1000px, 80px header
    assert_eq!(scroll_target_top(400.0, 1000.0, 80.0), 1320.0);
    // No header
    assert_eq!(scroll_target_top(400.0, 1000.0, 0.0), 1400.0);
    // Target above the viewport
    assert_eq!(scroll_target_top(-250.0, 1000.0, 80.0), 670.0);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(AnchorError::BareHash.to_string(), "bare '#' has no target");
    assert_eq!(
        AnchorError::NotFragment("x".into()).to_string(),
        "href \"x\" is not a same-page fragment"
    );
}
