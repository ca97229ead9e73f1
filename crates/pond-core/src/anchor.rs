//! Same-page anchor handling for smooth scrolling.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnchorError {
    #[error("href {0:?} is not a same-page fragment")]
    NotFragment(String),
    #[error("bare '#' has no target")]
    BareHash,
}

/// Validate an anchor `href` and return it as a selector for the target.
///
/// Only `#name` style hrefs qualify; `#` on its own is left to the browser.
pub fn fragment_selector(href: &str) -> Result<&str, AnchorError> {
    if !href.starts_with('#') {
        return Err(AnchorError::NotFragment(href.to_string()));
    }
    if href == "#" {
        return Err(AnchorError::BareHash);
    }
    Ok(href)
}

/// Document-relative scroll position that puts the target just below a fixed
/// header of `header_offset` pixels.
#[inline]
pub fn scroll_target_top(rect_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    rect_top + scroll_y - header_offset
}
