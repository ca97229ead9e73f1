//! Page-lifetime state shared by the event handlers.
//!
//! Everything here is transient: it starts from `Default` on page load and is
//! never persisted. The web frontend keeps one instance behind an
//! `Rc<RefCell<_>>` and only touches it from the main thread.

use crate::audio::AudioState;
use crate::header::HeaderState;
use crate::nav::MenuState;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteState {
    pub header: HeaderState,
    pub menu: MenuState,
    pub audio: AudioState,
}
