/// Playback quality and loop-mode vocabulary
use serde::{Deserialize, Serialize};

/// Video quality tiers understood by the hosted player widget.
///
/// The wire strings match the widget's own quality vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VideoQuality {
    /// 144p, the cheapest tier the widget supports
    Tiny,
    /// 240p
    Small,
    /// 360p
    #[default]
    Medium,
    /// 480p
    Large,
    /// 720p
    Hd720,
}

impl VideoQuality {
    /// The cheapest tier, used whenever video is hidden
    pub const LOWEST: VideoQuality = VideoQuality::Tiny;

    /// Quality string in the widget's vocabulary
    pub fn as_api_str(self) -> &'static str {
        match self {
            VideoQuality::Tiny => "tiny",
            VideoQuality::Small => "small",
            VideoQuality::Medium => "medium",
            VideoQuality::Large => "large",
            VideoQuality::Hd720 => "hd720",
        }
    }
}

/// Audio quality preference, surfaced while video is hidden.
///
/// The hosted backend has no audio-only streams; these tiers map onto the
/// video tiers actually requested from the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioQuality {
    /// Cheapest stream that still carries audio
    #[default]
    Low,
    /// Balanced
    Mid,
    /// Best available audio
    High,
}

impl AudioQuality {
    /// The video tier this audio preference maps onto
    pub fn video_tier(self) -> VideoQuality {
        match self {
            AudioQuality::Low => VideoQuality::Small,
            AudioQuality::Mid => VideoQuality::Medium,
            AudioQuality::High => VideoQuality::Hd720,
        }
    }
}

/// What happens when the current track reaches its end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopMode {
    /// No looping preference; the queue still auto-advances
    Off,
    /// Replay the current track from the start
    RepeatOne,
    /// Advance to the next track, wrapping at the end of the queue
    #[default]
    Advance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_tiers_are_ordered() {
        assert!(VideoQuality::Tiny < VideoQuality::Small);
        assert!(VideoQuality::Small < VideoQuality::Hd720);
        assert_eq!(VideoQuality::LOWEST, VideoQuality::Tiny);
    }

    #[test]
    fn api_strings_match_widget_vocabulary() {
        assert_eq!(VideoQuality::Tiny.as_api_str(), "tiny");
        assert_eq!(VideoQuality::Hd720.as_api_str(), "hd720");
    }

    #[test]
    fn audio_tiers_map_to_video_tiers() {
        assert_eq!(AudioQuality::Low.video_tier(), VideoQuality::Small);
        assert_eq!(AudioQuality::High.video_tier(), VideoQuality::Hd720);
    }
}
