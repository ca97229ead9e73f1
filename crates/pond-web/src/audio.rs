use crate::dom;
use pond_core::{AudioCommand, AudioView, SiteState, CLASS_MUTED};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
fn apply(button: &web::Element, view: AudioView) {
    dom::set_class(button, CLASS_MUTED, view.muted);
    _ = button.set_attribute("aria-label", view.aria_label);
}

fn revert(button: &web::Element, state: &RefCell<SiteState>) {
    let view = state.borrow_mut().audio.revert_to_paused();
    apply(button, view);
}

pub fn wire(
    audio: web::HtmlMediaElement,
    toggle: web::Element,
    state: Rc<RefCell<SiteState>>,
) -> anyhow::Result<()> {
    let button = toggle.clone();
    dom::listen(&toggle, "click", move |_: web::MouseEvent| {
        let view = state.borrow_mut().audio.toggle();
        match view.command {
            AudioCommand::Pause => {
                if let Err(e) = audio.pause() {
                    log::warn!("[audio] pause failed: {e:?}");
                }
            }
            AudioCommand::Play => match audio.play() {
                Ok(promise) => {
                    // Autoplay policies reject the promise rather than throwing
                    let state = state.clone();
                    let button = button.clone();
                    spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::warn!("[audio] play rejected: {e:?}");
                            revert(&button, &state);
                        }
                    });
                }
                Err(e) => {
                    log::warn!("[audio] play failed: {e:?}");
                    revert(&button, &state);
                    return;
                }
            },
        }
        apply(&button, view);
    })
}
