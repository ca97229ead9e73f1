//! Header hide/show on scroll.
//!
//! Scroll events are coalesced into at most one update per animation frame.
//! The update compares the new offset with the previous sample and only flips
//! visibility once the delta leaves the hysteresis band, so small jitters
//! around a stationary position do not make the header flicker.

use crate::config::SiteConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderState {
    pub last_scroll_y: f64,
    pub visible: bool,
    ticking: bool,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            last_scroll_y: 0.0,
            visible: true,
            ticking: false,
        }
    }
}

/// Classes the header should carry after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub scrolled: bool,
    pub hidden: bool,
}

impl HeaderState {
    /// Returns true when the caller should schedule a frame; false while one
    /// is already pending.
    #[inline]
    pub fn request_frame(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    #[inline]
    pub fn frame_pending(&self) -> bool {
        self.ticking
    }

    /// Apply a scroll sample. Clears the pending-frame guard.
    pub fn update(&mut self, scroll_y: f64, config: &SiteConfig) -> HeaderView {
        let scrolled = scroll_y > config.scroll_threshold;

        if scroll_y > config.header_hide_threshold {
            if scroll_y > self.last_scroll_y + config.hysteresis_px && self.visible {
                self.visible = false;
                log::debug!("[header] hide at y={scroll_y:.0}");
            } else if scroll_y < self.last_scroll_y - config.hysteresis_px && !self.visible {
                self.visible = true;
                log::debug!("[header] show at y={scroll_y:.0}");
            }
        } else {
            self.visible = true;
        }

        self.last_scroll_y = scroll_y;
        self.ticking = false;

        HeaderView {
            scrolled,
            hidden: !self.visible,
        }
    }
}
