//! Background renderer lifecycle.
//!
//! Owns the live element batch for one variant and reseeds it whenever the
//! world or viewport changes. Frame scheduling lives in the host (the web
//! crate drives `frame` from requestAnimationFrame); this type only guarantees
//! that a batch is always replaced as a whole and never accumulates.

use crate::draw;
use crate::element::{seed_batch, Viewport, VisualElement};
use crate::surface::Surface;
use crate::theme::{config_for, RendererVariant, ThemeConfig};
use crate::world::{EffectsLevel, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct BackgroundRenderer {
    variant: RendererVariant,
    world: World,
    viewport: Viewport,
    effects: EffectsLevel,
    elements: Vec<VisualElement>,
    running: bool,
    rng: StdRng,
}

impl BackgroundRenderer {
    pub fn new(variant: RendererVariant, seed: u64) -> Self {
        Self::with_rng(variant, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(variant: RendererVariant, rng: StdRng) -> Self {
        Self {
            variant,
            world: World::default(),
            viewport: Viewport::default(),
            effects: EffectsLevel::default(),
            elements: Vec::new(),
            running: false,
            rng,
        }
    }

    pub fn variant(&self) -> RendererVariant {
        self.variant
    }

    pub fn world(&self) -> World {
        self.world
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elements(&self) -> &[VisualElement] {
        &self.elements
    }

    pub fn config(&self) -> &'static ThemeConfig {
        config_for(self.variant, self.world)
    }

    /// Begin rendering `world` at `viewport`. Returns `false` when already
    /// running for the same world, in which case nothing changes.
    pub fn start(&mut self, world: World, viewport: Viewport) -> bool {
        if self.running && self.world == world {
            return false;
        }
        self.world = world;
        self.viewport = viewport;
        self.running = true;
        self.reseed();
        log::debug!(
            "[background] start {:?} world={} elements={}",
            self.variant,
            world,
            self.elements.len()
        );
        true
    }

    pub fn on_theme_change(&mut self, world: World) {
        self.world = world;
        if self.running {
            self.reseed();
        }
    }

    /// Positions are viewport-relative, so a resize always reseeds.
    pub fn on_viewport_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.running {
            self.reseed();
        }
    }

    pub fn set_effects_level(&mut self, effects: EffectsLevel) {
        self.effects = effects;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elements.clear();
        self.elements.shrink_to_fit();
    }

    /// Advance every element by one frame without drawing.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }
        let margin = self.config().wrap_margin();
        for el in &mut self.elements {
            el.step(self.viewport, margin);
        }
    }

    /// Step the simulation and draw the batch in insertion order.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if !self.running {
            return;
        }
        self.step();
        surface.clear();
        let config = self.config();
        for el in &self.elements {
            draw::draw_element(surface, el, config, self.effects, &mut self.rng);
        }
        if let (Some(links), true) = (config.links.as_ref(), self.effects.is_high()) {
            draw::draw_links(surface, &self.elements, links);
        }
    }

    fn reseed(&mut self) {
        let config = self.config();
        self.elements = seed_batch(config, self.viewport, &mut self.rng);
    }
}
