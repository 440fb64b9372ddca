//! Master playback controller
//!
//! The single owner of playback intent and of every resource that hangs off
//! it: the player adapter, the keep-alive subsystem, the media-session
//! binding, and the progress poll. All user actions, hardware media
//! commands, widget events, and timer ticks funnel through here, so intent
//! transitions fan out from exactly one place and re-entering the same
//! state twice never double-starts anything.
//!
//! The controller is host-driven and single-threaded: call the command
//! methods from UI handlers, forward widget callbacks to
//! [`PlaybackController::handle_player_event`], and drive
//! [`PlaybackController::tick`] from a coarse repeating timer. All internal
//! deadlines (retry schedule, keep-alive pulse, progress poll) are data
//! checked against the `now` you pass in, which also makes every scenario
//! deterministic under test.

use crate::adapter::{AdapterSignal, PlayerAdapter};
use crate::continuity::{Continuity, KeepAliveSurface};
use crate::events::PlaybackEvent;
use crate::media_session::{MediaCommand, MediaSessionBinding, MediaSessionSurface};
use crate::player::{PlayerEvent, PlayerHandle};
use crate::queue::Queue;
use crate::settings::Settings;
use crate::types::{PlaybackConfig, PlaybackIntent, TimeProgress};
use neo_core::types::{AudioQuality, LoopMode, Track, VideoQuality};
use std::time::Instant;

/// Token tying an in-flight asynchronous queue replacement (a search, a
/// library load) to the request that started it.
///
/// Completions carrying a token that is no longer the newest are dropped,
/// so a slow search can never clobber a queue the user has already replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueRequestToken(u64);

/// Coordinates the queue, the playback intent state machine, the external
/// player, and the keep-alive machinery.
pub struct PlaybackController {
    config: PlaybackConfig,
    queue: Queue,
    intent: PlaybackIntent,
    settings: Settings,
    adapter: PlayerAdapter,
    continuity: Continuity,
    media_session: MediaSessionBinding,
    progress: TimeProgress,
    next_poll: Option<Instant>,
    queue_request_seq: u64,
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    /// Create a controller around the host's player widget handle.
    pub fn new(player: Box<dyn PlayerHandle>, config: PlaybackConfig) -> Self {
        let mut settings = Settings::default();
        settings.set_volume(config.initial_volume);
        settings.set_loop_mode(config.initial_loop);

        let adapter = PlayerAdapter::new(
            player,
            settings.effective_quality(),
            settings.volume(),
            config.load_retry_delays.clone(),
        );

        Self {
            continuity: Continuity::new(config.keepalive_pulse_interval),
            config,
            queue: Queue::new(),
            intent: PlaybackIntent::Paused,
            settings,
            adapter,
            media_session: MediaSessionBinding::new(),
            progress: TimeProgress::default(),
            next_poll: None,
            queue_request_seq: 0,
            pending_events: Vec::new(),
        }
    }

    /// Install the platform keep-alive surface.
    pub fn with_keepalive(mut self, surface: Box<dyn KeepAliveSurface>) -> Self {
        self.continuity.set_surface(surface);
        self
    }

    /// Install the platform media-session surface.
    pub fn with_media_session(mut self, surface: Box<dyn MediaSessionSurface>) -> Self {
        self.media_session.set_surface(surface);
        self
    }

    // ===== Playback control =====

    /// User pressed play.
    pub fn play(&mut self, now: Instant) {
        if self.queue.is_empty() {
            return;
        }
        self.set_intent(now, PlaybackIntent::Playing);
    }

    /// User pressed pause. Always wins, including against an in-flight
    /// track load.
    pub fn pause(&mut self, now: Instant) {
        self.set_intent(now, PlaybackIntent::Paused);
    }

    /// User toggled play/pause.
    pub fn toggle_play_pause(&mut self, now: Instant) {
        match self.intent {
            PlaybackIntent::Playing => self.pause(now),
            PlaybackIntent::Paused => self.play(now),
        }
    }

    /// Skip forward one track.
    pub fn next(&mut self, now: Instant) {
        self.advance_by(now, 1);
    }

    /// Skip back one track.
    pub fn previous(&mut self, now: Instant) {
        self.advance_by(now, -1);
    }

    /// Jump to a specific queue position (a tap in the queue list).
    pub fn select(&mut self, now: Instant, index: usize) {
        let previous = self.current_track_id();
        if !self.queue.select(index) {
            return;
        }
        self.start_current(now, true, previous);
    }

    /// Seek to an absolute position in the current track.
    ///
    /// Never touches intent: seeking while paused stays paused.
    pub fn seek_to(&mut self, seconds: f64) {
        if self.queue.is_empty() {
            return;
        }
        let seconds = seconds.max(0.0);
        self.adapter.seek(seconds);
        self.progress.position_secs = seconds;
        self.media_session.publish_position(self.progress);
    }

    /// Seek relative to the current position (the +10s/-10s buttons).
    pub fn skip_by(&mut self, delta_secs: f64) {
        if self.queue.is_empty() {
            return;
        }
        let mut target = self.progress.position_secs + delta_secs;
        if self.progress.duration_secs > 0.0 {
            target = target.min(self.progress.duration_secs);
        }
        self.seek_to(target);
    }

    // ===== Queue management =====

    /// Replace the whole queue.
    ///
    /// An empty replacement empties the queue and forces pause; otherwise
    /// playback starts from the front when autoplay-on-replace is
    /// configured, and continues with the prior intent when it is not.
    pub fn replace_queue(&mut self, now: Instant, tracks: Vec<Track>) {
        let previous = self.current_track_id();
        self.queue.replace(tracks);
        self.emit_queue_changed();

        if self.queue.is_empty() {
            self.enter_empty_state(now);
        } else {
            self.start_current(now, self.config.autoplay_on_replace, previous);
        }
    }

    /// Append tracks to the queue.
    ///
    /// Appending to an empty queue behaves like a replacement: the first
    /// appended track becomes current.
    pub fn append_tracks(&mut self, now: Instant, tracks: Vec<Track>) {
        if tracks.is_empty() {
            return;
        }
        let was_empty = self.queue.is_empty();
        self.queue.append(tracks);
        self.emit_queue_changed();

        if was_empty {
            self.start_current(now, self.config.autoplay_on_replace, None);
        }
    }

    /// Remove the track at `index`.
    ///
    /// Removing the current track loads its successor without changing
    /// intent; removing the last remaining track forces pause.
    pub fn remove_at(&mut self, now: Instant, index: usize) {
        if index >= self.queue.len() {
            return;
        }
        let was_current = index == self.queue.cursor();
        let previous = self.current_track_id();
        self.queue.remove_at(index);
        self.emit_queue_changed();

        if self.queue.is_empty() {
            self.enter_empty_state(now);
        } else if was_current {
            self.start_current(now, false, previous);
        }
    }

    /// Register a new asynchronous queue-replacement request (search or
    /// library load) and get the token its completion must present.
    ///
    /// Each call invalidates all previously issued tokens.
    pub fn begin_queue_request(&mut self) -> QueueRequestToken {
        self.queue_request_seq += 1;
        QueueRequestToken(self.queue_request_seq)
    }

    /// Complete an asynchronous queue-replacement request.
    ///
    /// Stale completions (a newer request has been issued since) are
    /// dropped.
    pub fn complete_queue_request(
        &mut self,
        now: Instant,
        token: QueueRequestToken,
        tracks: Vec<Track>,
    ) {
        if token.0 != self.queue_request_seq {
            tracing::debug!("dropping stale queue replacement (token {})", token.0);
            return;
        }
        self.replace_queue(now, tracks);
    }

    // ===== External feeds =====

    /// Forward a state change reported by the embedded widget.
    pub fn handle_player_event(&mut self, now: Instant, event: PlayerEvent) {
        match self.adapter.handle_event(event, self.intent) {
            AdapterSignal::None | AdapterSignal::Confirmed => {}
            AdapterSignal::SpuriousPause => {
                tracing::debug!("suppressed widget pause during track load");
            }
            AdapterSignal::ReportedPause => {
                // Advisory only. With intent already paused there is nothing
                // to do; with intent playing the report is not trusted.
                if self.intent.is_playing() {
                    tracing::debug!("ignoring widget pause report; intent is playing");
                }
            }
            AdapterSignal::Ended => self.on_track_ended(now),
        }
    }

    /// Forward a command from the hardware media surface.
    ///
    /// Routed through the live controller state, so lock-screen skips always
    /// act on the current queue.
    pub fn handle_media_command(&mut self, now: Instant, command: MediaCommand) {
        match command {
            MediaCommand::Play => self.play(now),
            MediaCommand::Pause | MediaCommand::Stop => self.pause(now),
            MediaCommand::Toggle => self.toggle_play_pause(now),
            MediaCommand::Previous => self.previous(now),
            MediaCommand::Next => self.next(now),
            MediaCommand::SeekTo(seconds) => self.seek_to(seconds),
        }
    }

    /// Drive time-based behavior: retry deadlines, keep-alive pulses, and
    /// the progress poll.
    ///
    /// Polling reads state and publishes it; it never mutates intent.
    pub fn tick(&mut self, now: Instant) {
        self.adapter.tick(now, self.intent);
        self.continuity.tick(now);

        if !self.intent.is_playing() {
            return;
        }
        let Some(deadline) = self.next_poll else {
            return;
        };
        if now < deadline {
            return;
        }
        self.progress = self.adapter.progress();
        self.media_session.publish_position(self.progress);
        self.pending_events.push(PlaybackEvent::PositionUpdate {
            position_secs: self.progress.position_secs,
            duration_secs: self.progress.duration_secs,
        });
        self.next_poll = Some(now + self.config.poll_interval);
    }

    // ===== Settings =====

    /// Toggle video visibility (ignored while a forcing mode is on).
    pub fn set_video_visible(&mut self, visible: bool) {
        self.settings.set_video_visible(visible);
        self.apply_effective_quality();
    }

    /// Flip data-saver mode.
    pub fn set_data_saver(&mut self, on: bool) {
        self.settings.set_data_saver(on);
        self.apply_effective_quality();
    }

    /// Flip background mode.
    pub fn set_background_mode(&mut self, on: bool) {
        self.settings.set_background_mode(on);
        self.apply_effective_quality();
    }

    /// Pick an explicit video quality.
    pub fn set_video_quality(&mut self, quality: VideoQuality) {
        self.settings.set_video_quality(quality);
        self.apply_effective_quality();
    }

    /// Pick an audio tier for hidden-video playback.
    pub fn set_audio_quality(&mut self, quality: AudioQuality) {
        self.settings.set_audio_quality(quality);
    }

    /// Change the loop mode.
    pub fn set_loop_mode(&mut self, mode: LoopMode) {
        self.settings.set_loop_mode(mode);
    }

    /// Set volume (0-100).
    pub fn set_volume(&mut self, volume: u8) {
        self.settings.set_volume(volume);
        self.adapter.set_volume(self.settings.volume());
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.settings.volume(),
        });
    }

    // ===== State queries =====

    /// Current playback intent
    pub fn intent(&self) -> PlaybackIntent {
        self.intent
    }

    /// The track under the queue cursor
    pub fn current_track(&self) -> Option<&Track> {
        self.queue.current()
    }

    /// The active queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Last polled progress
    pub fn progress(&self) -> TimeProgress {
        self.progress
    }

    /// Current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether a track load is still inside its retry window
    pub fn is_loading(&self) -> bool {
        self.adapter.loading()
    }

    /// Drain all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are undrained events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn current_track_id(&self) -> Option<String> {
        self.queue.current().map(|t| t.id.clone())
    }

    /// Move the cursor and start whatever it lands on.
    ///
    /// Advancing always forces intent to playing, whatever it was before:
    /// a lock-screen "next" must never leave the user staring at a paused
    /// player. One synchronous unit - cursor, load, intent - so a
    /// concurrently arriving end-of-track report cannot advance twice.
    fn advance_by(&mut self, now: Instant, direction: i64) {
        if self.queue.is_empty() {
            return;
        }
        let previous = self.current_track_id();
        self.queue.advance(direction);
        self.start_current(now, true, previous);
    }

    /// Load the track under the cursor and update everything that mirrors
    /// it.
    fn start_current(&mut self, now: Instant, force_play: bool, previous_track_id: Option<String>) {
        let Some(track) = self.queue.current().cloned() else {
            return;
        };

        self.progress = TimeProgress::default();
        self.media_session.publish_track(Some(&track));
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });

        let resume = force_play || self.intent.is_playing();
        self.adapter.load(&track, now, resume);

        if force_play {
            self.set_intent(now, PlaybackIntent::Playing);
        } else if self.intent.is_playing() {
            // Keep the poll fresh for the new track.
            self.next_poll = Some(now);
        }
    }

    /// Natural end of the current track.
    fn on_track_ended(&mut self, now: Instant) {
        if !self.intent.is_playing() {
            return;
        }
        if self.settings.loop_mode() == LoopMode::RepeatOne {
            self.adapter.seek(0.0);
            self.adapter.play();
            self.progress.position_secs = 0.0;
            self.media_session.publish_position(self.progress);
        } else {
            self.advance_by(now, 1);
        }
    }

    /// The one fan-out point for intent changes.
    ///
    /// Idempotent: setting the current value again does nothing, so the
    /// keep-alive machinery can never be double-started.
    fn set_intent(&mut self, now: Instant, target: PlaybackIntent) {
        if self.intent == target {
            return;
        }
        self.intent = target;

        match target {
            PlaybackIntent::Playing => {
                self.adapter.play();
                self.continuity.activate(now);
                self.media_session.publish_status(true);
                self.next_poll = Some(now);
            }
            PlaybackIntent::Paused => {
                self.adapter.pause();
                self.continuity.deactivate();
                self.media_session.publish_status(false);
                self.next_poll = None;
            }
        }

        self.pending_events
            .push(PlaybackEvent::IntentChanged { intent: target });
    }

    /// Queue just became empty: force pause and clear the mirrors.
    fn enter_empty_state(&mut self, now: Instant) {
        self.set_intent(now, PlaybackIntent::Paused);
        self.progress = TimeProgress::default();
        self.media_session.publish_track(None);
    }

    fn apply_effective_quality(&mut self) {
        self.adapter.set_quality(self.settings.effective_quality());
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}
