//! One-time element lookup shared by every behavior.

use crate::dom;
use pond_core::{
    ANCHOR_SELECTOR, AUDIO_ID, AUDIO_TOGGLE_ID, HEADER_SELECTOR, LAZY_VIDEO_SELECTOR,
    MOBILE_MENU_SELECTOR, NAV_TOGGLE_SELECTOR, REVEAL_SELECTOR,
};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Elements {
    pub header: Option<web::HtmlElement>,
    pub nav_toggle: Option<web::HtmlElement>,
    pub mobile_menu: Option<web::Element>,
    pub body: Option<web::HtmlElement>,
    pub reveal_targets: Vec<web::Element>,
    pub lazy_videos: Vec<web::Element>,
    pub anchors: Vec<web::Element>,
    pub audio: Option<web::HtmlMediaElement>,
    pub audio_toggle: Option<web::Element>,
}

impl Elements {
    pub fn lookup(document: &web::Document) -> Self {
        Self {
            header: html(dom::query(document, HEADER_SELECTOR)),
            nav_toggle: html(dom::query(document, NAV_TOGGLE_SELECTOR)),
            mobile_menu: dom::query(document, MOBILE_MENU_SELECTOR),
            body: document.body(),
            reveal_targets: dom::query_all(document, REVEAL_SELECTOR),
            lazy_videos: dom::query_all(document, LAZY_VIDEO_SELECTOR),
            anchors: dom::query_all(document, ANCHOR_SELECTOR),
            audio: document
                .get_element_by_id(AUDIO_ID)
                .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok()),
            audio_toggle: document.get_element_by_id(AUDIO_TOGGLE_ID),
        }
    }
}

#[inline]
fn html(el: Option<web::Element>) -> Option<web::HtmlElement> {
    el.and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}
