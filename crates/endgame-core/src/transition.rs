//! Immersive travel: a fixed Depart → Traverse → Arrive sequence.
//!
//! `TravelSequence` is the single scheduler for the phases; the coordinator
//! walks it and awaits one `PhaseTimer::sleep` per hold. Entering immersive
//! mode is animated, leaving it (`exit_immersive`) is instant.

use crate::constants::{ARRIVE_HOLD, DEPART_HOLD, TRAVERSE_HOLD};
use crate::error::{CueError, TravelError};
use crate::immersive::{ImmersiveState, ImmersiveStore, SubscriptionId};
use crate::markers::{ModeMarkers, PhaseMarker};
use crate::prefs::{self, PreferenceStore};
use crate::world::{EffectsLevel, World};
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TravelPhase {
    #[default]
    Idle,
    Depart,
    Traverse,
    Arrive,
}

impl TravelPhase {
    pub fn marker(self) -> Option<PhaseMarker> {
        match self {
            TravelPhase::Idle => None,
            TravelPhase::Depart => Some(PhaseMarker::Depart),
            TravelPhase::Traverse => Some(PhaseMarker::Traverse),
            TravelPhase::Arrive => Some(PhaseMarker::Arrive),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TravelTimings {
    pub depart: Duration,
    pub traverse: Duration,
    pub arrive: Duration,
}

impl Default for TravelTimings {
    fn default() -> Self {
        Self {
            depart: DEPART_HOLD,
            traverse: TRAVERSE_HOLD,
            arrive: ARRIVE_HOLD,
        }
    }
}

impl TravelTimings {
    pub fn total(&self) -> Duration {
        self.depart + self.traverse + self.arrive
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseStep {
    pub phase: TravelPhase,
    pub hold: Duration,
}

/// Yields each phase exactly once, in order, ending with a zero-hold `Idle`.
#[derive(Clone, Debug)]
pub struct TravelSequence {
    next: Option<TravelPhase>,
    timings: TravelTimings,
}

impl TravelSequence {
    pub fn new(timings: TravelTimings) -> Self {
        Self {
            next: Some(TravelPhase::Depart),
            timings,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.next.is_none()
    }
}

impl Iterator for TravelSequence {
    type Item = PhaseStep;

    fn next(&mut self) -> Option<PhaseStep> {
        let phase = self.next?;
        let (hold, following) = match phase {
            TravelPhase::Depart => (self.timings.depart, Some(TravelPhase::Traverse)),
            TravelPhase::Traverse => (self.timings.traverse, Some(TravelPhase::Arrive)),
            TravelPhase::Arrive => (self.timings.arrive, Some(TravelPhase::Idle)),
            TravelPhase::Idle => (Duration::ZERO, None),
        };
        self.next = following;
        Some(PhaseStep { phase, hold })
    }
}

/// Real-time delay source for phase holds.
pub trait PhaseTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Fire-and-forget sound played when a travel enters `Traverse`.
pub trait AudioCue {
    fn play(&self, volume: f32) -> Result<(), CueError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TravelOutcome {
    /// The world was committed during `Arrive`.
    Arrived(World),
    /// Immersive mode was exited mid-flight; the phases ran out but the world
    /// was not committed.
    Abandoned,
}

pub struct TransitionCoordinator {
    store: RefCell<ImmersiveStore>,
    prefs: Rc<dyn PreferenceStore>,
    markers: Rc<dyn ModeMarkers>,
    cue: Rc<dyn AudioCue>,
    timer: Rc<dyn PhaseTimer>,
    timings: TravelTimings,
    phase: Cell<TravelPhase>,
    in_flight: Cell<Option<World>>,
    exit_epoch: Cell<u64>,
}

impl TransitionCoordinator {
    /// Build a coordinator with settings loaded from `prefs`.
    pub fn new(
        prefs: Rc<dyn PreferenceStore>,
        markers: Rc<dyn ModeMarkers>,
        cue: Rc<dyn AudioCue>,
        timer: Rc<dyn PhaseTimer>,
    ) -> Self {
        let settings = prefs::load_settings(prefs.as_ref());
        Self {
            store: RefCell::new(ImmersiveStore::new(settings)),
            prefs,
            markers,
            cue,
            timer,
            timings: TravelTimings::default(),
            phase: Cell::new(TravelPhase::Idle),
            in_flight: Cell::new(None),
            exit_epoch: Cell::new(0),
        }
    }

    pub fn with_timings(mut self, timings: TravelTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn state(&self) -> ImmersiveState {
        self.store.borrow().state()
    }

    pub fn phase(&self) -> TravelPhase {
        self.phase.get()
    }

    pub fn travelling_to(&self) -> Option<World> {
        self.in_flight.get()
    }

    /// Listeners run synchronously after each change and must not call back
    /// into the coordinator.
    pub fn subscribe(&self, listener: impl Fn(&ImmersiveState) + 'static) -> SubscriptionId {
        self.store.borrow_mut().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.borrow_mut().unsubscribe(id)
    }

    pub fn set_immersive(&self, enabled: bool) {
        if !enabled {
            self.exit_epoch.set(self.exit_epoch.get() + 1);
        }
        self.apply(|s| s.is_immersive = enabled);
    }

    /// Leave immersive mode immediately, without a transition.
    pub fn exit_immersive(&self) {
        if let Some(world) = self.in_flight.get() {
            log::info!("[travel] exit while travelling to {world}; arrival will not commit");
        }
        self.set_immersive(false);
    }

    /// Select a world directly. Ignored while not immersive.
    pub fn set_world(&self, world: Option<World>) {
        if world.is_some() && !self.state().is_immersive {
            log::warn!("[travel] set_world({world:?}) ignored outside immersive mode");
            return;
        }
        self.apply(|s| s.selected_world = world);
    }

    pub fn set_effects_level(&self, level: EffectsLevel) {
        self.apply_settings(|s| s.settings.effects_level = level);
    }

    pub fn set_audio_enabled(&self, enabled: bool) {
        self.apply_settings(|s| s.settings.audio_enabled = enabled);
    }

    /// Volume is clamped to `[0, 0.8]`.
    pub fn set_audio_volume(&self, volume: f32) {
        self.apply_settings(|s| s.settings.audio_volume = volume);
    }

    /// Run the full travel sequence to `world`. Resolves once every phase has
    /// finished and all phase markers are clear. A second request while one
    /// is in flight is rejected.
    pub async fn begin_travel(&self, world: World) -> Result<TravelOutcome, TravelError> {
        if let Some(current) = self.in_flight.get() {
            log::warn!("[travel] rejected travel to {world}: already travelling to {current}");
            return Err(TravelError::InFlight(current));
        }
        self.in_flight.set(Some(world));
        let mut guard = TravelGuard {
            coordinator: self,
            finished: false,
        };
        let epoch = self.exit_epoch.get();
        let mut committed = false;
        log::info!("[travel] departing for {world}");

        for step in TravelSequence::new(self.timings) {
            self.phase.set(step.phase);
            log::debug!("[travel] phase {:?} hold {:?}", step.phase, step.hold);
            match step.phase {
                TravelPhase::Depart => self.markers.set_phase(PhaseMarker::Depart, true),
                TravelPhase::Traverse => {
                    self.markers.set_phase(PhaseMarker::Traverse, true);
                    self.play_cue();
                }
                TravelPhase::Arrive => {
                    if self.exit_epoch.get() == epoch {
                        self.apply(|s| {
                            s.is_immersive = true;
                            s.selected_world = Some(world);
                        });
                        committed = true;
                    }
                    self.markers.set_phase(PhaseMarker::Depart, false);
                    self.markers.set_phase(PhaseMarker::Traverse, false);
                    // No arrival effect once the page has left immersive mode.
                    if committed {
                        self.markers.set_phase(PhaseMarker::Arrive, true);
                    }
                }
                TravelPhase::Idle => self.markers.set_phase(PhaseMarker::Arrive, false),
            }
            if !step.hold.is_zero() {
                self.timer.sleep(step.hold).await;
            }
        }

        guard.finished = true;
        drop(guard);
        self.in_flight.set(None);
        if committed {
            log::info!("[travel] arrived at {world}");
            Ok(TravelOutcome::Arrived(world))
        } else {
            log::info!("[travel] travel to {world} abandoned");
            Ok(TravelOutcome::Abandoned)
        }
    }

    fn play_cue(&self) {
        let settings = self.state().settings;
        if !settings.audio_enabled {
            return;
        }
        if let Err(e) = self.cue.play(settings.audio_volume) {
            log::debug!("[travel] audio cue dropped: {e}");
        }
    }

    fn apply(&self, f: impl FnOnce(&mut ImmersiveState)) -> ImmersiveState {
        let state = self.store.borrow_mut().update(f);
        self.markers.set_immersive(state.is_immersive);
        self.markers.set_world(state.selected_world);
        state
    }

    fn apply_settings(&self, f: impl FnOnce(&mut ImmersiveState)) {
        let before = self.state().settings;
        let after = self.apply(f).settings;
        if after != before {
            prefs::save_settings(self.prefs.as_ref(), &after);
        }
    }

    /// Reset phase bookkeeping when a travel future is dropped before it
    /// finished, so later travels are not rejected forever.
    fn abort_travel(&self) {
        log::debug!("[travel] sequence dropped in {:?}", self.phase.get());
        for marker in PhaseMarker::ALL {
            self.markers.set_phase(marker, false);
        }
        self.phase.set(TravelPhase::Idle);
        self.in_flight.set(None);
    }
}

struct TravelGuard<'a> {
    coordinator: &'a TransitionCoordinator,
    finished: bool,
}

impl Drop for TravelGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.coordinator.abort_travel();
        }
    }
}
