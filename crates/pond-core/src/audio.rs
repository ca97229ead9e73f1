//! Background audio play/pause toggle.

use crate::constants::{LABEL_PAUSE_AUDIO, LABEL_PLAY_AUDIO};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    Play,
    Pause,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AudioState {
    pub playing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioView {
    pub command: AudioCommand,
    pub muted: bool,
    pub aria_label: &'static str,
}

impl AudioState {
    /// Flip the playing flag and return what the media element and button
    /// should do.
    pub fn toggle(&mut self) -> AudioView {
        self.playing = !self.playing;
        log::debug!("[audio] playing={}", self.playing);
        self.view()
    }

    /// Called when `play()` was refused by the browser.
    pub fn revert_to_paused(&mut self) -> AudioView {
        self.playing = false;
        self.view()
    }

    pub fn view(&self) -> AudioView {
        if self.playing {
            AudioView {
                command: AudioCommand::Play,
                muted: false,
                aria_label: LABEL_PAUSE_AUDIO,
            }
        } else {
            AudioView {
                command: AudioCommand::Pause,
                muted: true,
                aria_label: LABEL_PLAY_AUDIO,
            }
        }
    }
}
