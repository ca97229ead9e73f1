use crate::dom;
use pond_core::{ObserverSpec, TriggerSet};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe `targets` and call `on_enter` the first time each one intersects.
///
/// Every target is unobserved on its first intersecting entry, so the
/// observer winds down by itself once all targets have fired.
pub fn observe_once(
    targets: Vec<web::Element>,
    spec: ObserverSpec,
    mut on_enter: impl FnMut(&web::Element) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let targets = Rc::new(targets);
    let mut fired = TriggerSet::new();

    let watched = targets.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(index) = watched.iter().position(|el| *el == target) else {
                    continue;
                };
                if fired.fire(index) {
                    on_enter(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(spec.threshold));
    options.set_root_margin(spec.root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom::js_err)?;
    callback.forget();

    for target in targets.iter() {
        observer.observe(target);
    }
    log::debug!(
        "[observer] watching {} element(s), margin {:?}",
        targets.len(),
        spec.root_margin
    );
    Ok(observer)
}
