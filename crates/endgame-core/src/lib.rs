pub mod constants;
pub mod draw;
pub mod element;
pub mod error;
pub mod immersive;
pub mod markers;
pub mod prefs;
pub mod renderer;
pub mod selection;
pub mod surface;
pub mod theme;
pub mod transition;
pub mod world;

pub use element::{Viewport, VisualElement};
pub use error::*;
pub use immersive::*;
pub use markers::*;
pub use prefs::{MemoryStore, PreferenceStore};
pub use renderer::BackgroundRenderer;
pub use selection::ThemeSelection;
pub use surface::Surface;
pub use theme::*;
pub use transition::*;
pub use world::*;
