use crate::dom;
use pond_core::{HeaderView, SiteConfig, SiteState, CLASS_HIDDEN, CLASS_SCROLLED};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct HeaderDom {
    window: web::Window,
    header: web::HtmlElement,
    state: Rc<RefCell<SiteState>>,
    config: Rc<SiteConfig>,
}

impl HeaderDom {
    fn refresh(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let view = self.state.borrow_mut().header.update(scroll_y, &self.config);
        apply(&self.header, view);
    }
}

#[inline]
fn apply(header: &web::Element, view: HeaderView) {
    dom::set_class(header, CLASS_SCROLLED, view.scrolled);
    dom::set_class(header, CLASS_HIDDEN, view.hidden);
}

/// Coalesce scroll events into one header update per animation frame.
pub fn wire(
    window: &web::Window,
    header: web::HtmlElement,
    state: Rc<RefCell<SiteState>>,
    config: Rc<SiteConfig>,
) -> anyhow::Result<()> {
    let ctx = HeaderDom {
        window: window.clone(),
        header,
        state,
        config,
    };

    let frame_ctx = ctx.clone();
    let frame = Closure::wrap(Box::new(move || frame_ctx.refresh()) as Box<dyn FnMut()>);

    dom::listen_passive(window, "scroll", move |_: web::Event| {
        if !ctx.state.borrow_mut().header.request_frame() {
            return;
        }
        if let Err(e) = ctx
            .window
            .request_animation_frame(frame.as_ref().unchecked_ref())
        {
            log::warn!("[header] requestAnimationFrame failed: {e:?}");
            ctx.refresh();
        }
    })
}
