use crate::dom;
use pond_core::{fragment_selector, scroll_target_top, ScrollMode, SiteConfig};
use web_sys as web;

fn scroll_to(window: &web::Window, top: f64, mode: ScrollMode) {
    let options = web::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(match mode {
        ScrollMode::Auto => web::ScrollBehavior::Auto,
        ScrollMode::Smooth => web::ScrollBehavior::Smooth,
    });
    window.scroll_to_with_scroll_to_options(&options);
}

/// Scroll same-page links to their target, leaving room for the fixed header.
///
/// Links whose fragment does not resolve to an element keep the browser's
/// default jump.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    anchors: Vec<web::Element>,
    header: Option<web::HtmlElement>,
    config: &SiteConfig,
) -> anyhow::Result<()> {
    let mode = config.scroll_mode();
    for anchor in anchors {
        let window = window.clone();
        let document = document.clone();
        let header = header.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let selector = match fragment_selector(&href) {
                Ok(selector) => selector,
                Err(e) => {
                    log::debug!("[anchors] {e}");
                    return;
                }
            };
            let Some(target) = dom::query(&document, selector) else {
                return;
            };
            ev.prevent_default();

            let header_offset = header
                .as_ref()
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0);
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let rect_top = target.get_bounding_client_rect().top();
            scroll_to(
                &window,
                scroll_target_top(rect_top, scroll_y, header_offset),
                mode,
            );
        })?;
    }
    Ok(())
}
