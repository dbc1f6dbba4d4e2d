// Shared fakes for host-side tests: virtual clock timers, recording markers,
// recording audio cue and a recording drawing surface.

#![allow(dead_code)]

use endgame_core::*;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

pub type Clock = Rc<Cell<Duration>>;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Completes every sleep immediately, advancing the shared virtual clock.
pub struct VirtualTimer {
    pub now: Clock,
}

impl PhaseTimer for VirtualTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        self.now.set(self.now.get() + duration);
        Box::pin(futures::future::ready(()))
    }
}

/// Sleeps stay pending until the test releases them one by one.
#[derive(Default)]
pub struct GateTimer {
    pending: RefCell<VecDeque<(Duration, oneshot::Sender<()>)>>,
}

impl GateTimer {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Release the oldest pending sleep and return its duration.
    pub fn release(&self) -> Option<Duration> {
        let (d, tx) = self.pending.borrow_mut().pop_front()?;
        let _ = tx.send(());
        Some(d)
    }
}

impl PhaseTimer for GateTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push_back((duration, tx));
        Box::pin(async move {
            let _ = rx.await;
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MarkerEvent {
    Theme(World),
    Immersive(bool),
    World(Option<World>),
    Phase(PhaseMarker, bool),
}

#[derive(Default)]
pub struct RecordingMarkers {
    pub clock: Clock,
    pub events: RefCell<Vec<(Duration, MarkerEvent)>>,
    pub phases: RefCell<HashSet<PhaseMarker>>,
    pub immersive: Cell<bool>,
    pub world: Cell<Option<World>>,
    pub theme: Cell<Option<World>>,
}

impl RecordingMarkers {
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    pub fn has_phase(&self, marker: PhaseMarker) -> bool {
        self.phases.borrow().contains(&marker)
    }

    pub fn no_phases(&self) -> bool {
        self.phases.borrow().is_empty()
    }

    /// Time at which `event` was first recorded.
    pub fn first_at(&self, event: &MarkerEvent) -> Option<Duration> {
        self.events
            .borrow()
            .iter()
            .find(|(_, e)| e == event)
            .map(|(t, _)| *t)
    }

    fn record(&self, event: MarkerEvent) {
        self.events.borrow_mut().push((self.clock.get(), event));
    }
}

impl ModeMarkers for RecordingMarkers {
    fn set_theme(&self, world: World) {
        self.theme.set(Some(world));
        self.record(MarkerEvent::Theme(world));
    }

    fn set_immersive(&self, on: bool) {
        self.immersive.set(on);
        self.record(MarkerEvent::Immersive(on));
    }

    fn set_world(&self, world: Option<World>) {
        self.world.set(world);
        self.record(MarkerEvent::World(world));
    }

    fn set_phase(&self, marker: PhaseMarker, on: bool) {
        if on {
            self.phases.borrow_mut().insert(marker);
        } else {
            self.phases.borrow_mut().remove(&marker);
        }
        self.record(MarkerEvent::Phase(marker, on));
    }
}

#[derive(Default)]
pub struct RecordingCue {
    pub clock: Clock,
    pub plays: RefCell<Vec<(Duration, f32)>>,
    pub fail: bool,
}

impl AudioCue for RecordingCue {
    fn play(&self, volume: f32) -> Result<(), CueError> {
        self.plays.borrow_mut().push((self.clock.get(), volume));
        if self.fail {
            Err(CueError::Rejected("NotAllowedError".into()))
        } else {
            Ok(())
        }
    }
}

/// Counts drawing calls instead of rasterizing.
#[derive(Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub clears: usize,
    pub fills: usize,
    pub strokes: usize,
    pub shadows: Vec<f64>,
    pub fill_styles: Vec<String>,
    pub depth: i32,
    pub max_depth: i32,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
    fn clear(&mut self) {
        self.clears += 1;
    }
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }
    fn restore(&mut self) {
        self.depth -= 1;
    }
    fn translate(&mut self, _x: f64, _y: f64) {}
    fn rotate(&mut self, _radians: f64) {}
    fn set_alpha(&mut self, _alpha: f64) {}
    fn set_fill(&mut self, css: &str) {
        self.fill_styles.push(css.to_string());
    }
    fn set_stroke(&mut self, _css: &str) {}
    fn set_line_width(&mut self, _width: f64) {}
    fn set_shadow(&mut self, blur: f64, _css: &str) {
        self.shadows.push(blur);
    }
    fn set_fill_linear_gradient(
        &mut self,
        _x0: f64,
        _y0: f64,
        _x1: f64,
        _y1: f64,
        _from: &str,
        _to: &str,
    ) {
    }
    fn begin_path(&mut self) {}
    fn close_path(&mut self) {}
    fn move_to(&mut self, _x: f64, _y: f64) {}
    fn line_to(&mut self, _x: f64, _y: f64) {}
    fn quadratic_curve_to(&mut self, _cx: f64, _cy: f64, _x: f64, _y: f64) {}
    fn arc(&mut self, _x: f64, _y: f64, _radius: f64) {}
    fn ellipse(&mut self, _x: f64, _y: f64, _rx: f64, _ry: f64, _rotation: f64) {}
    fn rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {}
    fn fill(&mut self) {
        self.fills += 1;
    }
    fn stroke(&mut self) {
        self.strokes += 1;
    }
}

pub struct Harness<T: PhaseTimer> {
    pub clock: Clock,
    pub markers: Rc<RecordingMarkers>,
    pub cue: Rc<RecordingCue>,
    pub prefs: Rc<MemoryStore>,
    pub timer: Rc<T>,
    pub coordinator: Rc<TransitionCoordinator>,
}

fn build<T: PhaseTimer + 'static>(
    clock: Clock,
    timer: Rc<T>,
    prefs: MemoryStore,
    cue_fails: bool,
) -> Harness<T> {
    let markers = Rc::new(RecordingMarkers::with_clock(clock.clone()));
    let cue = Rc::new(RecordingCue {
        clock: clock.clone(),
        fail: cue_fails,
        ..RecordingCue::default()
    });
    let prefs = Rc::new(prefs);
    let coordinator = Rc::new(TransitionCoordinator::new(
        prefs.clone(),
        markers.clone(),
        cue.clone(),
        timer.clone(),
    ));
    Harness {
        clock,
        markers,
        cue,
        prefs,
        timer,
        coordinator,
    }
}

pub fn virtual_harness(prefs: MemoryStore) -> Harness<VirtualTimer> {
    let clock = Clock::default();
    let timer = Rc::new(VirtualTimer { now: clock.clone() });
    build(clock, timer, prefs, false)
}

pub fn failing_cue_harness(prefs: MemoryStore) -> Harness<VirtualTimer> {
    let clock = Clock::default();
    let timer = Rc::new(VirtualTimer { now: clock.clone() });
    build(clock, timer, prefs, true)
}

pub fn gated_harness(prefs: MemoryStore) -> Harness<GateTimer> {
    build(Clock::default(), Rc::new(GateTimer::default()), prefs, false)
}

pub fn audio_prefs(enabled: bool, volume: f32) -> MemoryStore {
    MemoryStore::new().with_entry(
        "endgame-immersive",
        &format!(
            r#"{{"effectsLevel":"high","audioEnabled":{enabled},"audioVolume":{volume}}}"#
        ),
    )
}
