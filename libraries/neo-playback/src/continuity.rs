//! Keep-alive subsystem
//!
//! Mobile platforms treat an embedded video widget as a second-class audio
//! source and suspend the page's script or audio focus soon after the tab
//! leaves the foreground. Three mechanisms, all gated on playback intent,
//! keep the session alive:
//!
//! 1. a near-silent looping companion audio element (not muted - muted
//!    media sessions get deprioritized),
//! 2. a periodic inaudible tone pulsed through the shared audio graph so the
//!    graph never auto-suspends,
//! 3. a screen wake lock, where the platform grants one.
//!
//! The host supplies the actual platform resources via [`KeepAliveSurface`];
//! this module owns when they run. Only the playback controller activates or
//! deactivates the subsystem, which is what keeps the on/off state from
//! diverging.

use std::time::{Duration, Instant};

/// Platform keep-alive resources.
///
/// Implementations hold the browser/OS objects (audio element, audio graph,
/// wake-lock sentinel). All resources are process-lifetime singletons on the
/// host side; this trait is only ever driven by one [`Continuity`] instance.
pub trait KeepAliveSurface {
    /// Start the near-silent companion audio loop
    fn start_silent_loop(&mut self);

    /// Stop the companion loop
    fn stop_silent_loop(&mut self);

    /// Emit one inaudible tone through the shared audio graph
    fn pulse(&mut self);

    /// Try to acquire the screen wake lock.
    ///
    /// Returns false when the platform refuses (unsupported API, permission
    /// denied); the caller treats that as non-fatal.
    fn acquire_wake_lock(&mut self) -> bool;

    /// Release the wake lock if held
    fn release_wake_lock(&mut self);
}

/// Keep-alive state machine, driven by the controller.
pub(crate) struct Continuity {
    surface: Option<Box<dyn KeepAliveSurface>>,
    pulse_interval: Duration,
    active: bool,
    wake_lock_held: bool,
    next_pulse: Option<Instant>,
}

impl Continuity {
    pub(crate) fn new(pulse_interval: Duration) -> Self {
        Self {
            surface: None,
            pulse_interval,
            active: false,
            wake_lock_held: false,
            next_pulse: None,
        }
    }

    pub(crate) fn set_surface(&mut self, surface: Box<dyn KeepAliveSurface>) {
        self.surface = Some(surface);
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    /// Bring every mechanism up. Idempotent: re-entering the active state
    /// neither restarts the pulse timer nor re-acquires the wake lock.
    pub(crate) fn activate(&mut self, now: Instant) {
        if self.active {
            return;
        }
        self.active = true;
        self.next_pulse = Some(now + self.pulse_interval);

        if let Some(surface) = self.surface.as_mut() {
            surface.start_silent_loop();
            self.wake_lock_held = surface.acquire_wake_lock();
            if !self.wake_lock_held {
                tracing::warn!("wake lock unavailable; continuing without it");
            }
        }
    }

    /// Tear every mechanism down. Idempotent.
    pub(crate) fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.next_pulse = None;

        if let Some(surface) = self.surface.as_mut() {
            surface.stop_silent_loop();
            if self.wake_lock_held {
                surface.release_wake_lock();
                self.wake_lock_held = false;
            }
        }
    }

    /// Emit a tone pulse when one is due.
    pub(crate) fn tick(&mut self, now: Instant) {
        if !self.active {
            return;
        }
        let Some(deadline) = self.next_pulse else {
            return;
        };
        if now < deadline {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.pulse();
        }
        self.next_pulse = Some(now + self.pulse_interval);
    }
}

impl Drop for Continuity {
    /// Resources are released on every exit path, including abrupt host
    /// teardown while playing.
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Counters {
        loop_starts: usize,
        loop_stops: usize,
        pulses: usize,
        lock_acquires: usize,
        lock_releases: usize,
    }

    struct CountingSurface {
        counters: Rc<RefCell<Counters>>,
        grant_lock: bool,
    }

    impl KeepAliveSurface for CountingSurface {
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
            self.grant_lock
        }
        fn release_wake_lock(&mut self) {
            self.counters.borrow_mut().lock_releases += 1;
        }
    }

    fn continuity(grant_lock: bool) -> (Continuity, Rc<RefCell<Counters>>) {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let mut continuity = Continuity::new(Duration::from_secs(15));
        continuity.set_surface(Box::new(CountingSurface {
            counters: counters.clone(),
            grant_lock,
        }));
        (continuity, counters)
    }

    #[test]
    fn double_activation_starts_everything_once() {
        let (mut continuity, counters) = continuity(true);
        let t0 = Instant::now();

        continuity.activate(t0);
        continuity.activate(t0 + Duration::from_secs(1));

        let c = counters.borrow();
        assert_eq!(c.loop_starts, 1);
        assert_eq!(c.lock_acquires, 1);
    }

    #[test]
    fn pulses_fire_on_the_interval() {
        let (mut continuity, counters) = continuity(true);
        let t0 = Instant::now();
        continuity.activate(t0);

        continuity.tick(t0 + Duration::from_secs(5));
        assert_eq!(counters.borrow().pulses, 0);

        continuity.tick(t0 + Duration::from_secs(15));
        assert_eq!(counters.borrow().pulses, 1);

        // Next pulse is rescheduled relative to the firing tick.
        continuity.tick(t0 + Duration::from_secs(16));
        assert_eq!(counters.borrow().pulses, 1);
        continuity.tick(t0 + Duration::from_secs(31));
        assert_eq!(counters.borrow().pulses, 2);
    }

    #[test]
    fn deactivate_stops_pulses_and_releases_lock() {
        let (mut continuity, counters) = continuity(true);
        let t0 = Instant::now();

        continuity.activate(t0);
        continuity.deactivate();
        continuity.deactivate();

        continuity.tick(t0 + Duration::from_secs(60));

        let c = counters.borrow();
        assert_eq!(c.loop_stops, 1);
        assert_eq!(c.lock_releases, 1);
        assert_eq!(c.pulses, 0);
    }

    #[test]
    fn denied_wake_lock_is_not_released() {
        let (mut continuity, counters) = continuity(false);
        continuity.activate(Instant::now());
        continuity.deactivate();

        let c = counters.borrow();
        assert_eq!(c.lock_acquires, 1);
        assert_eq!(c.lock_releases, 0);
        assert_eq!(c.loop_stops, 1);
    }

    #[test]
    fn drop_releases_resources() {
        let (mut continuity, counters) = continuity(true);
        continuity.activate(Instant::now());
        drop(continuity);

        let c = counters.borrow();
        assert_eq!(c.loop_stops, 1);
        assert_eq!(c.lock_releases, 1);
    }

    #[test]
    fn missing_surface_degrades_silently() {
        let mut continuity = Continuity::new(Duration::from_secs(15));
        let t0 = Instant::now();
        continuity.activate(t0);
        continuity.tick(t0 + Duration::from_secs(20));
        continuity.deactivate();
        assert!(!continuity.is_active());
    }
}
