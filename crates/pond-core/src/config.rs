//! Load-time configuration shared by every behavior.
//!
//! Thresholds come from [`crate::constants`]; the only runtime input is the
//! reduced-motion preference, read once when the page initializes.

use crate::constants::*;

/// Options for one `IntersectionObserver`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverSpec {
    pub threshold: f64,
    pub root_margin: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub scroll_threshold: f64,
    pub header_hide_threshold: f64,
    pub hysteresis_px: f64,
    pub reveal: ObserverSpec,
    pub lazy_video: ObserverSpec,
    pub reduced_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: SCROLL_THRESHOLD_PX,
            header_hide_threshold: HEADER_HIDE_THRESHOLD_PX,
            hysteresis_px: SCROLL_HYSTERESIS_PX,
            reveal: ObserverSpec {
                threshold: REVEAL_THRESHOLD,
                root_margin: REVEAL_ROOT_MARGIN,
            },
            lazy_video: ObserverSpec {
                threshold: LAZY_VIDEO_THRESHOLD,
                root_margin: LAZY_VIDEO_ROOT_MARGIN,
            },
            reduced_motion: false,
        }
    }
}

impl SiteConfig {
    pub fn with_reduced_motion(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            ..Self::default()
        }
    }

    /// Scroll behavior for programmatic scrolling.
    #[inline]
    pub fn scroll_mode(&self) -> ScrollMode {
        if self.reduced_motion {
            ScrollMode::Auto
        } else {
            ScrollMode::Smooth
        }
    }

    /// How reveal targets should become visible.
    #[inline]
    pub fn reveal_mode(&self) -> RevealMode {
        if self.reduced_motion {
            RevealMode::Immediate
        } else {
            RevealMode::OnIntersect
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Auto,
    Smooth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    Immediate,
    OnIntersect,
}
