#![cfg(target_arch = "wasm32")]
use pond_core::{SiteConfig, SiteState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod anchors;
mod audio;
mod dom;
mod elements;
mod header;
mod nav;
mod observer;
mod prefs;
mod reveal;
mod video;

use elements::Elements;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pond-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_: web::Event| run_init())
            .map_err(|e| JsValue::from_str(&format!("{e:?}")))?;
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn report(behavior: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{behavior}] wiring failed: {e:?}");
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = Rc::new(SiteConfig::with_reduced_motion(
        prefs::prefers_reduced_motion(&window),
    ));
    let state = Rc::new(RefCell::new(SiteState::default()));
    let els = Elements::lookup(&document);
    log::info!(
        "[init] reduced_motion={} reveal={} videos={} anchors={}",
        config.reduced_motion,
        els.reveal_targets.len(),
        els.lazy_videos.len(),
        els.anchors.len()
    );

    match els.header.clone() {
        Some(header_el) => report(
            "header",
            header::wire(&window, header_el, state.clone(), config.clone()),
        ),
        None => log::debug!("[header] no header; scroll behavior disabled"),
    }

    match (els.nav_toggle, els.mobile_menu) {
        (Some(toggle), Some(menu)) => report(
            "nav",
            nav::wire(&document, toggle, menu, els.body, state.clone()),
        ),
        _ => log::debug!("[nav] trigger or menu missing; mobile nav disabled"),
    }

    reveal::wire(els.reveal_targets, &config);
    report("video", video::wire(els.lazy_videos, &config));
    report(
        "anchors",
        anchors::wire(&window, &document, els.anchors, els.header, &config),
    );

    match (els.audio, els.audio_toggle) {
        (Some(media), Some(toggle)) => report("audio", audio::wire(media, toggle, state)),
        _ => log::debug!("[audio] audio element or toggle missing; toggle disabled"),
    }

    Ok(())
}
