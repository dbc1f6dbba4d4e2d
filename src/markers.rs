use crate::constants::{IMMERSIVE_ATTR, IMMERSIVE_ON, PLANET_ATTR, THEME_ATTR};
use crate::dom;
use endgame_core::{ModeMarkers, PhaseMarker, World};
use web_sys as web;

/// Mode markers on the document root (`<html>`).
pub struct DocumentMarkers {
    root: Option<web::Element>,
}

impl DocumentMarkers {
    pub fn new() -> Self {
        let root = dom::root_element();
        if root.is_none() {
            log::warn!("[markers] no document element; mode markers disabled");
        }
        Self { root }
    }
}

impl Default for DocumentMarkers {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeMarkers for DocumentMarkers {
    fn set_theme(&self, world: World) {
        if let Some(root) = &self.root {
            _ = root.set_attribute(THEME_ATTR, world.id());
        }
    }

    fn set_immersive(&self, on: bool) {
        if let Some(root) = &self.root {
            if on {
                _ = root.set_attribute(IMMERSIVE_ATTR, IMMERSIVE_ON);
            } else {
                _ = root.remove_attribute(IMMERSIVE_ATTR);
            }
        }
    }

    fn set_world(&self, world: Option<World>) {
        if let Some(root) = &self.root {
            match world {
                Some(w) => {
                    _ = root.set_attribute(PLANET_ATTR, w.id());
                }
                None => {
                    _ = root.remove_attribute(PLANET_ATTR);
                }
            }
        }
    }

    fn set_phase(&self, marker: PhaseMarker, on: bool) {
        if let Some(root) = &self.root {
            let cl = root.class_list();
            if on {
                _ = cl.add_1(marker.class_name());
            } else {
                _ = cl.remove_1(marker.class_name());
            }
        }
    }
}
