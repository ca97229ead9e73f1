use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// First match for `selector`; an invalid selector counts as no match.
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    match document.query_selector(selector) {
        Ok(el) => el,
        Err(e) => {
            log::debug!("[dom] bad selector {selector:?}: {e:?}");
            None
        }
    }
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(elements_of)
        .unwrap_or_default()
}

pub fn query_all_within(parent: &web::Element, selector: &str) -> Vec<web::Element> {
    parent
        .query_selector_all(selector)
        .map(elements_of)
        .unwrap_or_default()
}

fn elements_of(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

/// Attach `handler` for the page lifetime. Events that are not an `E` are
/// dropped.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> anyhow::Result<()>
where
    E: JsCast + 'static,
{
    let closure = wrap(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Same as [`listen`] but registered as a passive listener.
pub fn listen_passive<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> anyhow::Result<()>
where
    E: JsCast + 'static,
{
    let closure = wrap(handler);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

fn wrap<E>(mut handler: impl FnMut(E) + 'static) -> Closure<dyn FnMut(web::Event)>
where
    E: JsCast + 'static,
{
    Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>)
}
