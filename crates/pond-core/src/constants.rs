// Shared thresholds, selectors and class names used by the web frontend.

// Header scroll
pub const SCROLL_THRESHOLD_PX: f64 = 50.0; // past this the header gets `scrolled`
pub const HEADER_HIDE_THRESHOLD_PX: f64 = 300.0; // below this the header never hides
pub const SCROLL_HYSTERESIS_PX: f64 = 5.0; // minimum delta before hide/show flips

// Intersection observers
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const LAZY_VIDEO_THRESHOLD: f64 = 0.0;
pub const LAZY_VIDEO_ROOT_MARGIN: &str = "200px 0px";

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Element lookup
pub const HEADER_SELECTOR: &str = ".site-header";
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const MOBILE_MENU_SELECTOR: &str = ".mobile-menu";
pub const MENU_LINK_SELECTOR: &str = "a";
pub const REVEAL_SELECTOR: &str =
    ".article-body, .full-image, .image-grid, .article-credits, .related";
pub const LAZY_VIDEO_SELECTOR: &str = ".lazy-video";
pub const LAZY_SOURCE_SELECTOR: &str = "source[data-src]";
pub const LAZY_SOURCE_ATTR: &str = "data-src";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const AUDIO_ID: &str = "bg-audio";
pub const AUDIO_TOGGLE_ID: &str = "audio-toggle";

// Classes
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_OPEN: &str = "is-open";
pub const CLASS_FADE_IN: &str = "fade-in";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_MUTED: &str = "muted";

// Accessibility labels
pub const LABEL_PLAY_AUDIO: &str = "Play audio";
pub const LABEL_PAUSE_AUDIO: &str = "Pause audio";

pub const ESCAPE_KEY: &str = "Escape";
