use crate::{dom, observer};
use pond_core::{RevealMode, SiteConfig, CLASS_FADE_IN, CLASS_VISIBLE};
use web_sys as web;

fn reveal_all(targets: &[web::Element]) {
    for el in targets {
        dom::set_class(el, CLASS_VISIBLE, true);
    }
}

/// Fade reveal targets in as they scroll into view, or show them right away
/// when the user prefers reduced motion.
pub fn wire(targets: Vec<web::Element>, config: &SiteConfig) {
    if targets.is_empty() {
        return;
    }
    match config.reveal_mode() {
        RevealMode::Immediate => reveal_all(&targets),
        RevealMode::OnIntersect => {
            for el in &targets {
                dom::set_class(el, CLASS_FADE_IN, true);
            }
            if let Err(e) = observer::observe_once(targets.clone(), config.reveal, |el| {
                dom::set_class(el, CLASS_VISIBLE, true)
            }) {
                log::warn!("[reveal] no IntersectionObserver ({e:?}); revealing immediately");
                reveal_all(&targets);
            }
        }
    }
}
