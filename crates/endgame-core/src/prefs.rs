//! Flat key-value preference storage.
//!
//! Two records are persisted: the theme id under `THEME_KEY` and the
//! immersive settings as JSON under `IMMERSIVE_KEY`. Reads never fail; bad
//! or missing values fall back to defaults with a warning.

use crate::constants::{IMMERSIVE_KEY, THEME_KEY};
use crate::error::PrefsError;
use crate::immersive::ImmersiveSettings;
use crate::world::World;
use fnv::FnvHashMap;
use std::cell::RefCell;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// In-memory store for hosts without persistent storage.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<FnvHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn load_theme(store: &dyn PreferenceStore) -> World {
    World::from_stored(store.get(THEME_KEY).as_deref())
}

pub fn save_theme(store: &dyn PreferenceStore, world: World) {
    if let Err(e) = store.set(THEME_KEY, world.id()) {
        log::warn!("[prefs] {e}");
    }
}

pub fn parse_settings(raw: &str) -> Result<ImmersiveSettings, PrefsError> {
    let settings: ImmersiveSettings = serde_json::from_str(raw)?;
    Ok(settings.sanitized())
}

pub fn load_settings(store: &dyn PreferenceStore) -> ImmersiveSettings {
    match store.get(IMMERSIVE_KEY) {
        Some(raw) => parse_settings(&raw).unwrap_or_else(|e| {
            log::warn!("[prefs] failed to parse immersive settings: {e}");
            ImmersiveSettings::default()
        }),
        None => ImmersiveSettings::default(),
    }
}

pub fn save_settings(store: &dyn PreferenceStore, settings: &ImmersiveSettings) {
    let result = serde_json::to_string(settings)
        .map_err(PrefsError::from)
        .and_then(|json| store.set(IMMERSIVE_KEY, &json));
    if let Err(e) = result {
        log::warn!("[prefs] {e}");
    }
}
