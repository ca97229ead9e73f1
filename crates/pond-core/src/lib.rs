pub mod anchor;
pub mod audio;
pub mod config;
pub mod constants;
pub mod header;
pub mod nav;
pub mod observer;
pub mod state;
pub mod video;

pub use anchor::*;
pub use audio::*;
pub use config::*;
pub use constants::*;
pub use header::*;
pub use nav::*;
pub use observer::*;
pub use state::*;
pub use video::*;
