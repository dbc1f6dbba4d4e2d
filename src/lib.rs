#![cfg(target_arch = "wasm32")]
use endgame_core::{
    ModeMarkers, PreferenceStore, RendererVariant, ThemeSelection, TransitionCoordinator,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod audio;
mod bindings;
mod canvas;
mod constants;
mod dom;
mod frame;
mod markers;
mod overlay;
mod storage;
mod timer;

use constants::{PARTICLE_CANVAS_ID, WORLD_CANVAS_ID};
use frame::BackgroundLoop;

pub(crate) struct App {
    pub coordinator: Rc<TransitionCoordinator>,
    pub theme: Rc<RefCell<ThemeSelection>>,
    pub backgrounds: Vec<BackgroundLoop>,
}

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// The running app, if `start` has completed.
pub(crate) fn current_app() -> Option<Rc<App>> {
    APP.with(|app| app.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("endgame-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let prefs: Rc<dyn PreferenceStore> = Rc::new(storage::LocalStorage::open());
    let markers: Rc<dyn ModeMarkers> = Rc::new(markers::DocumentMarkers::new());
    let theme = Rc::new(RefCell::new(ThemeSelection::load(
        prefs.clone(),
        markers.clone(),
    )));
    let coordinator = Rc::new(TransitionCoordinator::new(
        prefs,
        markers,
        Rc::new(audio::WarpCue::default()),
        Rc::new(timer::TimeoutTimer),
    ));

    // Either canvas may be missing from a page; missing ones render nothing.
    let backgrounds: Vec<BackgroundLoop> = [
        (PARTICLE_CANVAS_ID, RendererVariant::Particles),
        (WORLD_CANVAS_ID, RendererVariant::Worlds),
    ]
    .into_iter()
    .filter_map(|(id, variant)| {
        let canvas = dom::canvas_by_id(&document, id)?;
        BackgroundLoop::attach(canvas, variant)
    })
    .collect();
    if backgrounds.is_empty() {
        log::info!("[background] no background canvas on this page");
    }

    let initial = coordinator.state();
    let current_theme = Rc::new(Cell::new(theme.borrow().theme()));
    let current_state = Rc::new(Cell::new(initial));
    for bg in &backgrounds {
        bg.set_effects_level(initial.effects_level());
        bg.start(initial.effective_world(current_theme.get()));
    }
    overlay::apply(&document, &initial);

    {
        let backgrounds = backgrounds.clone();
        let current_theme = current_theme.clone();
        let current_state = current_state.clone();
        theme.borrow_mut().subscribe(move |world| {
            current_theme.set(world);
            let effective = current_state.get().effective_world(world);
            for bg in &backgrounds {
                bg.on_theme_change(effective);
            }
        });
    }
    {
        let backgrounds = backgrounds.clone();
        coordinator.subscribe(move |state| {
            current_state.set(*state);
            let effective = state.effective_world(current_theme.get());
            for bg in &backgrounds {
                bg.set_effects_level(state.effects_level());
                bg.on_theme_change(effective);
            }
            overlay::apply(&document, state);
        });
    }

    APP.with(|app| {
        *app.borrow_mut() = Some(Rc::new(App {
            coordinator,
            theme,
            backgrounds,
        }))
    });
    Ok(())
}
