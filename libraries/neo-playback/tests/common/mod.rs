//! Shared fakes for controller integration tests

use neo_core::types::{Track, VideoQuality};
use neo_playback::{KeepAliveSurface, MediaMetadata, MediaSessionSurface, PlayerHandle, TimeProgress};
use std::cell::RefCell;
use std::rc::Rc;

/// Commands the fake player records
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCmd {
    Load(String),
    Play,
    Pause,
    Seek(f64),
    Volume(u8),
    Quality(VideoQuality),
}

/// Widget stand-in that records every command and serves scripted
/// position/duration readings.
pub struct FakePlayer {
    pub log: Rc<RefCell<Vec<PlayerCmd>>>,
    pub position: Rc<RefCell<f64>>,
    pub duration: Rc<RefCell<f64>>,
}

impl FakePlayer {
    pub fn new() -> (
        Self,
        Rc<RefCell<Vec<PlayerCmd>>>,
        Rc<RefCell<f64>>,
        Rc<RefCell<f64>>,
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let position = Rc::new(RefCell::new(0.0));
        let duration = Rc::new(RefCell::new(0.0));
        let player = Self {
            log: log.clone(),
            position: position.clone(),
            duration: duration.clone(),
        };
        (player, log, position, duration)
    }
}

impl PlayerHandle for FakePlayer {
    fn load(&mut self, track: &Track) {
        self.log.borrow_mut().push(PlayerCmd::Load(track.id.clone()));
    }
    fn play(&mut self) {
        self.log.borrow_mut().push(PlayerCmd::Play);
    }
    fn pause(&mut self) {
        self.log.borrow_mut().push(PlayerCmd::Pause);
    }
    fn seek(&mut self, seconds: f64) {
        self.log.borrow_mut().push(PlayerCmd::Seek(seconds));
    }
    fn set_volume(&mut self, volume: u8) {
        self.log.borrow_mut().push(PlayerCmd::Volume(volume));
    }
    fn set_quality(&mut self, quality: VideoQuality) {
        self.log.borrow_mut().push(PlayerCmd::Quality(quality));
    }
    fn current_time(&self) -> f64 {
        *self.position.borrow()
    }
    fn duration(&self) -> f64 {
        *self.duration.borrow()
    }
}

/// Counters exposed by the fake keep-alive surface
#[derive(Debug, Default)]
pub struct KeepAliveCounters {
    pub loop_starts: usize,
    pub loop_stops: usize,
    pub pulses: usize,
    pub lock_acquires: usize,
    pub lock_releases: usize,
}

pub struct FakeKeepAlive {
    pub counters: Rc<RefCell<KeepAliveCounters>>,
}

impl FakeKeepAlive {
    pub fn new() -> (Self, Rc<RefCell<KeepAliveCounters>>) {
        let counters = Rc::new(RefCell::new(KeepAliveCounters::default()));
        (
            Self {
                counters: counters.clone(),
            },
            counters,
        )
    }
}

impl KeepAliveSurface for FakeKeepAlive {
    fn start_silent_loop(&mut self) {
        self.counters.borrow_mut().loop_starts += 1;
    }
    fn stop_silent_loop(&mut self) {
        self.counters.borrow_mut().loop_stops += 1;
    }
    fn pulse(&mut self) {
        self.counters.borrow_mut().pulses += 1;
    }
    fn acquire_wake_lock(&mut self) -> bool {
        self.counters.borrow_mut().lock_acquires += 1;
        true
    }
    fn release_wake_lock(&mut self) {
        self.counters.borrow_mut().lock_releases += 1;
    }
}

/// What the fake media-session surface last saw
#[derive(Debug, Default)]
pub struct MediaSessionState {
    pub metadata: Option<MediaMetadata>,
    pub playing: Option<bool>,
    pub positions: Vec<TimeProgress>,
    pub cleared: usize,
}

pub struct FakeMediaSession {
    pub state: Rc<RefCell<MediaSessionState>>,
}

impl FakeMediaSession {
    pub fn new() -> (Self, Rc<RefCell<MediaSessionState>>) {
        let state = Rc::new(RefCell::new(MediaSessionState::default()));
        (
            Self {
                state: state.clone(),
            },
            state,
        )
    }
}

impl MediaSessionSurface for FakeMediaSession {
    fn set_metadata(&mut self, metadata: &MediaMetadata) {
        self.state.borrow_mut().metadata = Some(metadata.clone());
    }
    fn set_playback_status(&mut self, playing: bool) {
        self.state.borrow_mut().playing = Some(playing);
    }
    fn set_position(&mut self, progress: TimeProgress) {
        self.state.borrow_mut().positions.push(progress);
    }
    fn clear(&mut self) {
        let mut state = self.state.borrow_mut();
        state.metadata = None;
        state.cleared += 1;
    }
}

/// Build a list of test tracks from short ids
pub fn tracks(ids: &[&str]) -> Vec<Track> {
    ids.iter()
        .map(|id| Track::new(*id, format!("Track {id}"), "Test Channel"))
        .collect()
}

/// Count play commands in a log
pub fn plays(log: &Rc<RefCell<Vec<PlayerCmd>>>) -> usize {
    log.borrow()
        .iter()
        .filter(|c| **c == PlayerCmd::Play)
        .count()
}

/// Ids of tracks loaded into the player, in order
pub fn loads(log: &Rc<RefCell<Vec<PlayerCmd>>>) -> Vec<String> {
    log.borrow()
        .iter()
        .filter_map(|c| match c {
            PlayerCmd::Load(id) => Some(id.clone()),
            _ => None,
        })
        .collect()
}
