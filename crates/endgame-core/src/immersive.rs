//! Immersive-mode state and its observer store.
//!
//! `ImmersiveStore` is the only place the state is mutated. Every setter
//! upholds `selected_world == None` whenever `is_immersive` is false and
//! notifies subscribers after the change is applied.

use crate::constants::{DEFAULT_AUDIO_VOLUME, MAX_AUDIO_VOLUME};
use crate::world::{EffectsLevel, World};
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

/// The persisted subset of the immersive state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImmersiveSettings {
    pub effects_level: EffectsLevel,
    pub audio_enabled: bool,
    pub audio_volume: f32,
}

impl Default for ImmersiveSettings {
    fn default() -> Self {
        Self {
            effects_level: EffectsLevel::High,
            audio_enabled: false,
            audio_volume: DEFAULT_AUDIO_VOLUME,
        }
    }
}

impl ImmersiveSettings {
    /// Clamp values read from storage into their valid ranges.
    pub fn sanitized(mut self) -> Self {
        self.audio_volume = clamp_volume(self.audio_volume);
        self
    }
}

#[inline]
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        DEFAULT_AUDIO_VOLUME
    } else {
        volume.clamp(0.0, MAX_AUDIO_VOLUME)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImmersiveState {
    pub is_immersive: bool,
    pub selected_world: Option<World>,
    pub settings: ImmersiveSettings,
}

impl ImmersiveState {
    pub fn effects_level(&self) -> EffectsLevel {
        self.settings.effects_level
    }

    pub fn audio_enabled(&self) -> bool {
        self.settings.audio_enabled
    }

    pub fn audio_volume(&self) -> f32 {
        self.settings.audio_volume
    }

    /// The world a background should show: the selected world while
    /// immersive, otherwise the site theme.
    pub fn effective_world(&self, theme: World) -> World {
        match (self.is_immersive, self.selected_world) {
            (true, Some(w)) => w,
            _ => theme,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&ImmersiveState)>;

#[derive(Default)]
pub struct ImmersiveStore {
    state: ImmersiveState,
    listeners: FnvHashMap<SubscriptionId, Listener>,
    next_id: u64,
}

impl ImmersiveStore {
    pub fn new(settings: ImmersiveSettings) -> Self {
        Self {
            state: ImmersiveState {
                settings: settings.sanitized(),
                ..ImmersiveState::default()
            },
            ..Self::default()
        }
    }

    pub fn state(&self) -> ImmersiveState {
        self.state
    }

    pub fn subscribe(&mut self, listener: impl Fn(&ImmersiveState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Apply `f` to a copy of the state, restore the world invariant and
    /// notify listeners if anything changed. Returns the new state.
    pub fn update(&mut self, f: impl FnOnce(&mut ImmersiveState)) -> ImmersiveState {
        let mut next = self.state;
        f(&mut next);
        if !next.is_immersive {
            next.selected_world = None;
        }
        next.settings = next.settings.sanitized();
        if next != self.state {
            self.state = next;
            self.notify();
        }
        self.state
    }

    fn notify(&self) {
        let mut ids: Vec<_> = self.listeners.keys().copied().collect();
        ids.sort_by_key(|id| id.0);
        for id in ids {
            if let Some(listener) = self.listeners.get(&id) {
                listener(&self.state);
            }
        }
    }
}
