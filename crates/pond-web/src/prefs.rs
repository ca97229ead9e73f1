use pond_core::REDUCED_MOTION_QUERY;
use web_sys as web;

/// Reads `prefers-reduced-motion`; browsers without `matchMedia` count as no
/// preference.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(mql)) => mql.matches(),
        Ok(None) => false,
        Err(e) => {
            log::debug!("[prefs] matchMedia failed: {e:?}");
            false
        }
    }
}
