use pond_core::{MenuState, MenuView, NavEvent, NavOutcome};

#[test]
fn toggle_alternates_open_and_closed() {
    let mut menu = MenuState::default();
    let opened = menu.handle(NavEvent::Toggle).unwrap();
    assert!(opened.view.open);
    assert!(!opened.focus_trigger);
    assert!(menu.open);

    let closed = menu.handle(NavEvent::Toggle).unwrap();
    assert!(!closed.view.open);
    assert!(!menu.open);
}

#[test]
fn open_view_attributes_are_consistent() {
    let open = MenuView { open: true };
    assert_eq!(open.aria_expanded(), "true");
    assert_eq!(open.aria_hidden(), "false");
    assert_eq!(open.body_overflow(), Some("hidden"));

    let closed = MenuView { open: false };
    assert_eq!(closed.aria_expanded(), "false");
    assert_eq!(closed.aria_hidden(), "true");
    assert_eq!(closed.body_overflow(), None);
}

#[test]
fn link_and_overlay_clicks_close() {
    for event in [NavEvent::LinkClick, NavEvent::OverlayClick] {
        let mut menu = MenuState { open: true };
        let outcome = menu.handle(event).unwrap();
        assert_eq!(
            outcome,
            NavOutcome {
                view: MenuView { open: false },
                focus_trigger: false,
            }
        );
        assert!(!menu.open);
    }
}

#[test]
fn escape_closes_and_returns_focus() {
    let mut menu = MenuState { open: true };
    let outcome = menu.handle(NavEvent::Escape).unwrap();
    assert!(!outcome.view.open);
    assert!(outcome.focus_trigger);
    assert!(!menu.open);
}

#[test]
fn escape_while_closed_is_ignored() {
    let mut menu = MenuState::default();
    assert_eq!(menu.handle(NavEvent::Escape), None);
    assert!(!menu.open);
}

#[test]
fn escape_key_mapping() {
    assert_eq!(NavEvent::from_key("Escape"), Some(NavEvent::Escape));
    assert_eq!(NavEvent::from_key("Esc"), None);
    assert_eq!(NavEvent::from_key("Enter"), None);
    assert_eq!(NavEvent::from_key(""), None);
}
