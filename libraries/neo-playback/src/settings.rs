//! Player settings and the effective-quality policy
//!
//! Three independent toggles fight over video visibility: an explicit
//! show/hide switch, the data-saver mode, and the background mode. The
//! rules here keep them from trampling each other, and the effective
//! quality is a pure function of the flags so it can be recomputed (and
//! tested) without any player in the loop.

use neo_core::types::{AudioQuality, LoopMode, VideoQuality};
use serde::{Deserialize, Serialize};

/// User-facing player settings.
///
/// Process-lifetime only; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    video_visible: bool,
    video_quality: VideoQuality,
    audio_quality: AudioQuality,
    data_saver: bool,
    background_mode: bool,
    loop_mode: LoopMode,
    volume: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            video_visible: true,
            video_quality: VideoQuality::default(),
            audio_quality: AudioQuality::default(),
            data_saver: false,
            background_mode: false,
            loop_mode: LoopMode::default(),
            volume: 80,
        }
    }
}

impl Settings {
    /// The quality actually requested from the widget.
    ///
    /// Any condition that hides the video also drops the stream to the
    /// cheapest tier; only fully visible playback honors the explicit
    /// quality pick.
    pub fn effective_quality(&self) -> VideoQuality {
        if self.data_saver || self.background_mode || !self.video_visible {
            VideoQuality::LOWEST
        } else {
            self.video_quality
        }
    }

    /// Whether the video surface should currently be shown
    pub fn video_visible(&self) -> bool {
        self.video_visible
    }

    /// Explicitly chosen video quality (what `effective_quality` returns
    /// while the video is visible)
    pub fn video_quality(&self) -> VideoQuality {
        self.video_quality
    }

    /// Audio-tier preference surfaced while the video is hidden
    pub fn audio_quality(&self) -> AudioQuality {
        self.audio_quality
    }

    /// Data-saver flag
    pub fn data_saver(&self) -> bool {
        self.data_saver
    }

    /// Background-mode flag
    pub fn background_mode(&self) -> bool {
        self.background_mode
    }

    /// Current loop mode
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// Current volume (0-100)
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Toggle video visibility.
    ///
    /// Ignored while data saver or background mode hold the video hidden;
    /// the explicit switch only works when neither forcing mode is on.
    pub fn set_video_visible(&mut self, visible: bool) {
        if self.data_saver || self.background_mode {
            return;
        }
        self.video_visible = visible;
    }

    /// Flip data-saver mode.
    ///
    /// Turning it on hides the video; turning it off restores visibility
    /// only when background mode is not also holding it hidden.
    pub fn set_data_saver(&mut self, on: bool) {
        self.data_saver = on;
        if on {
            self.video_visible = false;
        } else if !self.background_mode {
            self.video_visible = true;
        }
    }

    /// Flip background mode, with the same visibility coupling as data
    /// saver.
    pub fn set_background_mode(&mut self, on: bool) {
        self.background_mode = on;
        if on {
            self.video_visible = false;
        } else if !self.data_saver {
            self.video_visible = true;
        }
    }

    /// Pick an explicit video quality
    pub fn set_video_quality(&mut self, quality: VideoQuality) {
        self.video_quality = quality;
    }

    /// Pick an audio tier for hidden-video playback
    pub fn set_audio_quality(&mut self, quality: AudioQuality) {
        self.audio_quality = quality;
    }

    /// Change the loop mode
    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
    }

    /// Set volume, clamped to 0-100
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_playback_honors_explicit_quality() {
        let mut settings = Settings::default();
        settings.set_video_quality(VideoQuality::Hd720);
        assert_eq!(settings.effective_quality(), VideoQuality::Hd720);
    }

    #[test]
    fn data_saver_forces_hidden_video_and_lowest_tier() {
        let mut settings = Settings::default();
        settings.set_video_quality(VideoQuality::Hd720);

        settings.set_data_saver(true);
        assert!(!settings.video_visible());
        assert_eq!(settings.effective_quality(), VideoQuality::LOWEST);

        settings.set_data_saver(false);
        assert!(settings.video_visible());
        assert_eq!(settings.effective_quality(), VideoQuality::Hd720);
    }

    #[test]
    fn clearing_data_saver_defers_to_background_mode() {
        let mut settings = Settings::default();
        settings.set_background_mode(true);
        settings.set_data_saver(true);

        settings.set_data_saver(false);
        assert!(!settings.video_visible());
        assert_eq!(settings.effective_quality(), VideoQuality::LOWEST);

        settings.set_background_mode(false);
        assert!(settings.video_visible());
    }

    #[test]
    fn explicit_toggle_is_ignored_while_forced_hidden() {
        let mut settings = Settings::default();
        settings.set_data_saver(true);

        settings.set_video_visible(true);
        assert!(!settings.video_visible());
    }

    #[test]
    fn hiding_video_by_hand_also_drops_quality() {
        let mut settings = Settings::default();
        settings.set_video_quality(VideoQuality::Large);
        settings.set_video_visible(false);
        assert_eq!(settings.effective_quality(), VideoQuality::LOWEST);
    }

    #[test]
    fn volume_is_clamped() {
        let mut settings = Settings::default();
        settings.set_volume(250);
        assert_eq!(settings.volume(), 100);
    }
}
