//! Entry points for the page's UI widgets (world selector, HUD, settings).

use crate::current_app;
use endgame_core::{EffectsLevel, TravelOutcome, World};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Travel to `world`. The promise resolves with the world id on arrival,
/// `null` if immersive mode was exited mid-flight, and rejects when a travel
/// is already in progress. The sequence runs to completion even if the
/// promise is dropped.
#[wasm_bindgen(js_name = beginTravel)]
pub fn begin_travel(world: &str) -> js_sys::Promise {
    let parsed = world.parse::<World>();
    let app = current_app();
    future_to_promise(async move {
        let world = parsed.map_err(|e| JsValue::from_str(&e.to_string()))?;
        let app = app.ok_or_else(|| JsValue::from_str("endgame-web is not initialised"))?;
        match app.coordinator.begin_travel(world).await {
            Ok(TravelOutcome::Arrived(w)) => Ok(JsValue::from_str(w.id())),
            Ok(TravelOutcome::Abandoned) => Ok(JsValue::NULL),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    })
}

#[wasm_bindgen(js_name = exitImmersive)]
pub fn exit_immersive() {
    if let Some(app) = current_app() {
        app.coordinator.exit_immersive();
    }
}

#[wasm_bindgen(js_name = setImmersive)]
pub fn set_immersive(enabled: bool) {
    if let Some(app) = current_app() {
        app.coordinator.set_immersive(enabled);
    }
}

#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(world: &str) {
    let Some(app) = current_app() else {
        return;
    };
    match world.parse::<World>() {
        Ok(w) => app.theme.borrow_mut().set_theme(w),
        Err(e) => log::warn!("[theme] {e}; keeping {}", app.theme.borrow().theme()),
    }
}

#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> String {
    current_app()
        .map(|app| app.theme.borrow().theme())
        .unwrap_or_default()
        .id()
        .to_string()
}

#[wasm_bindgen(js_name = setEffectsLevel)]
pub fn set_effects_level(level: &str) {
    let level = match level {
        "low" => EffectsLevel::Low,
        "high" => EffectsLevel::High,
        other => {
            log::warn!("[settings] unknown effects level {other:?}");
            return;
        }
    };
    if let Some(app) = current_app() {
        app.coordinator.set_effects_level(level);
    }
}

#[wasm_bindgen(js_name = setAudioEnabled)]
pub fn set_audio_enabled(enabled: bool) {
    if let Some(app) = current_app() {
        app.coordinator.set_audio_enabled(enabled);
    }
}

#[wasm_bindgen(js_name = setAudioVolume)]
pub fn set_audio_volume(volume: f32) {
    if let Some(app) = current_app() {
        app.coordinator.set_audio_volume(volume);
    }
}

#[wasm_bindgen(js_name = isImmersive)]
pub fn is_immersive() -> bool {
    current_app().is_some_and(|app| app.coordinator.state().is_immersive)
}

#[wasm_bindgen(js_name = selectedWorld)]
pub fn selected_world() -> Option<String> {
    current_app()
        .and_then(|app| app.coordinator.state().selected_world)
        .map(|w| w.id().to_string())
}

/// Tear down every background loop (cancels frames, removes listeners).
#[wasm_bindgen(js_name = stopBackgrounds)]
pub fn stop_backgrounds() {
    if let Some(app) = current_app() {
        for bg in &app.backgrounds {
            bg.stop();
        }
    }
}
