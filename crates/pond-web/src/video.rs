use crate::observer;
use pond_core::{SiteConfig, VideoAction, LAZY_SOURCE_ATTR, LAZY_SOURCE_SELECTOR};
use wasm_bindgen::JsCast;
use web_sys as web;

fn load_deferred_source(video: &web::Element) {
    let source = video.query_selector(LAZY_SOURCE_SELECTOR).ok().flatten();
    let data_src = source.as_ref().and_then(|s| s.get_attribute(LAZY_SOURCE_ATTR));
    let (Some(source), VideoAction::Load(src)) = (source, VideoAction::for_source(data_src)) else {
        return;
    };
    _ = source.set_attribute("src", &src);
    if let Some(media) = video.dyn_ref::<web::HtmlMediaElement>() {
        media.load();
    }
    log::debug!("[video] loading {src}");
}

/// Defer `<source data-src>` assignment until a video is near the viewport.
pub fn wire(videos: Vec<web::Element>, config: &SiteConfig) -> anyhow::Result<()> {
    if videos.is_empty() {
        return Ok(());
    }
    observer::observe_once(videos, config.lazy_video, load_deferred_source)?;
    Ok(())
}
