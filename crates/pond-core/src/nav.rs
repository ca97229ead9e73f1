//! Mobile navigation overlay.

use crate::constants::ESCAPE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Click on the menu trigger.
    Toggle,
    /// Click on a link inside the menu.
    LinkClick,
    /// Click whose target is the overlay itself, not its content.
    OverlayClick,
    /// Escape pressed anywhere in the document.
    Escape,
}

impl NavEvent {
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        (key == ESCAPE_KEY).then_some(NavEvent::Escape)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

/// DOM state the trigger, menu and body should reflect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub open: bool,
}

impl MenuView {
    /// `aria-expanded` on the trigger.
    #[inline]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// `aria-hidden` on the menu.
    #[inline]
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }

    /// Body `overflow` value; `None` means remove the inline style.
    #[inline]
    pub fn body_overflow(&self) -> Option<&'static str> {
        self.open.then_some("hidden")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavOutcome {
    pub view: MenuView,
    pub focus_trigger: bool,
}

impl MenuState {
    /// Feed one event. `None` means the event does not touch the DOM.
    pub fn handle(&mut self, event: NavEvent) -> Option<NavOutcome> {
        let (open, focus_trigger) = match event {
            NavEvent::Toggle => (!self.open, false),
            NavEvent::LinkClick | NavEvent::OverlayClick => (false, false),
            NavEvent::Escape if self.open => (false, true),
            NavEvent::Escape => return None,
        };
        if open != self.open {
            log::debug!("[nav] {}", if open { "open" } else { "close" });
        }
        self.open = open;
        Some(NavOutcome {
            view: MenuView { open },
            focus_trigger,
        })
    }
}
