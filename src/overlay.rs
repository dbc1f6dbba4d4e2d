use crate::constants::{overlay_class, HIDDEN_CLASS, OVERLAY_DRIFT_CLASS, PLANET_OVERLAY_ID};
use endgame_core::{ImmersiveState, World};
use web_sys as web;

/// Show the decorative planet overlay for the selected world, or hide it
/// outside immersive mode.
pub fn apply(document: &web::Document, state: &ImmersiveState) {
    let Some(el) = document.get_element_by_id(PLANET_OVERLAY_ID) else {
        return;
    };
    let cl = el.class_list();
    for w in World::ALL {
        _ = cl.remove_1(&overlay_class(w.id()));
    }
    match (state.is_immersive, state.selected_world) {
        (true, Some(world)) => {
            _ = cl.add_1(&overlay_class(world.id()));
            _ = cl.toggle_with_force(OVERLAY_DRIFT_CLASS, state.effects_level().is_high());
            _ = cl.remove_1(HIDDEN_CLASS);
        }
        _ => {
            _ = cl.remove_1(OVERLAY_DRIFT_CLASS);
            _ = cl.add_1(HIDDEN_CLASS);
        }
    }
}
