use crate::dom;
use pond_core::{MenuView, NavEvent, SiteState, CLASS_OPEN, MENU_LINK_SELECTOR};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct NavDom {
    toggle: web::HtmlElement,
    menu: web::Element,
    body: Option<web::HtmlElement>,
}

impl NavDom {
    fn apply(&self, view: MenuView) {
        _ = self.toggle.set_attribute("aria-expanded", view.aria_expanded());
        dom::set_class(&self.menu, CLASS_OPEN, view.open);
        _ = self.menu.set_attribute("aria-hidden", view.aria_hidden());
        if let Some(body) = &self.body {
            let style = body.style();
            match view.body_overflow() {
                Some(value) => {
                    _ = style.set_property("overflow", value);
                }
                None => {
                    _ = style.remove_property("overflow");
                }
            }
        }
    }
}

fn dispatch(ctx: &NavDom, state: &RefCell<SiteState>, event: NavEvent) {
    let outcome = state.borrow_mut().menu.handle(event);
    let Some(outcome) = outcome else {
        return;
    };
    ctx.apply(outcome.view);
    if outcome.focus_trigger {
        _ = ctx.toggle.focus();
    }
}

pub fn wire(
    document: &web::Document,
    toggle: web::HtmlElement,
    menu: web::Element,
    body: Option<web::HtmlElement>,
    state: Rc<RefCell<SiteState>>,
) -> anyhow::Result<()> {
    let ctx = Rc::new(NavDom { toggle, menu, body });

    {
        let trigger = ctx.toggle.clone();
        let ctx = ctx.clone();
        let state = state.clone();
        dom::listen(&trigger, "click", move |_: web::MouseEvent| {
            dispatch(&ctx, &state, NavEvent::Toggle)
        })?;
    }

    for link in dom::query_all_within(&ctx.menu, MENU_LINK_SELECTOR) {
        let ctx = ctx.clone();
        let state = state.clone();
        dom::listen(&link, "click", move |_: web::MouseEvent| {
            dispatch(&ctx, &state, NavEvent::LinkClick)
        })?;
    }

    // Clicks on the backdrop, not on anything inside it
    {
        let overlay = ctx.menu.clone();
        let ctx = ctx.clone();
        let state = state.clone();
        dom::listen(&overlay, "click", move |ev: web::MouseEvent| {
            let backdrop: &web::EventTarget = &ctx.menu;
            if ev.target().as_ref() == Some(backdrop) {
                dispatch(&ctx, &state, NavEvent::OverlayClick);
            }
        })?;
    }

    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        if let Some(event) = NavEvent::from_key(&ev.key()) {
            dispatch(&ctx, &state, event);
        }
    })
}
