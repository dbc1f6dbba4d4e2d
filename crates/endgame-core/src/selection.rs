use crate::markers::ModeMarkers;
use crate::prefs::{self, PreferenceStore};
use crate::world::World;
use std::rc::Rc;

/// The site-wide theme, persisted and mirrored to the theme marker.
pub struct ThemeSelection {
    theme: World,
    store: Rc<dyn PreferenceStore>,
    markers: Rc<dyn ModeMarkers>,
    listeners: Vec<Box<dyn Fn(World)>>,
}

impl ThemeSelection {
    /// Load the stored theme (default on unknown/missing) and publish it.
    pub fn load(store: Rc<dyn PreferenceStore>, markers: Rc<dyn ModeMarkers>) -> Self {
        let theme = prefs::load_theme(store.as_ref());
        markers.set_theme(theme);
        Self {
            theme,
            store,
            markers,
            listeners: Vec::new(),
        }
    }

    pub fn theme(&self) -> World {
        self.theme
    }

    pub fn subscribe(&mut self, listener: impl Fn(World) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_theme(&mut self, theme: World) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.markers.set_theme(theme);
        prefs::save_theme(self.store.as_ref(), theme);
        log::info!("[theme] {}", theme);
        for l in &self.listeners {
            l(theme);
        }
    }
}
