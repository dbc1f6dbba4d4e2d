use crate::canvas::CanvasSurface;
use crate::constants::{FRAME_BUDGET_MS, SLOW_FRAME_LOG_EVERY};
use crate::dom;
use endgame_core::{BackgroundRenderer, EffectsLevel, RendererVariant, Surface, World};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopState {
    renderer: RefCell<BackgroundRenderer>,
    surface: RefCell<CanvasSurface>,
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    resize: RefCell<Option<Closure<dyn FnMut()>>>,
    slow_frames: Cell<u32>,
}

/// One background canvas driven by requestAnimationFrame.
#[derive(Clone)]
pub struct BackgroundLoop {
    state: Rc<LoopState>,
}

impl BackgroundLoop {
    /// Bind a renderer to `canvas`. Returns `None` (and renders nothing) when
    /// the canvas has no 2D context.
    pub fn attach(canvas: web::HtmlCanvasElement, variant: RendererVariant) -> Option<Self> {
        dom::style_background_canvas(&canvas, variant.canvas_opacity());
        let Some(surface) = CanvasSurface::new(canvas) else {
            log::debug!("[background] no 2d context for {:?}; staying idle", variant);
            return None;
        };
        let renderer = BackgroundRenderer::with_rng(variant, StdRng::from_entropy());
        Some(Self {
            state: Rc::new(LoopState {
                renderer: RefCell::new(renderer),
                surface: RefCell::new(surface),
                raf_id: Cell::new(None),
                tick: RefCell::new(None),
                resize: RefCell::new(None),
                slow_frames: Cell::new(0),
            }),
        })
    }

    /// Start rendering `world`. A second call for the running world is a no-op
    /// and never schedules a second loop.
    pub fn start(&self, world: World) {
        let viewport = dom::sync_canvas_to_window(self.state.surface.borrow().canvas());
        let started = self.state.renderer.borrow_mut().start(world, viewport);
        if started && self.state.tick.borrow().is_none() {
            self.wire_resize();
            self.install_tick();
            self.request_frame();
        }
    }

    pub fn on_theme_change(&self, world: World) {
        let mut renderer = self.state.renderer.borrow_mut();
        if renderer.world() != world {
            renderer.on_theme_change(world);
        }
    }

    pub fn set_effects_level(&self, level: EffectsLevel) {
        self.state.renderer.borrow_mut().set_effects_level(level);
    }

    /// Cancel the pending frame, drop the callbacks and clear the canvas.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.state.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.state.tick.borrow_mut().take();
        if let Some(resize) = self.state.resize.borrow_mut().take() {
            if let Some(w) = web::window() {
                _ = w.remove_event_listener_with_callback(
                    "resize",
                    resize.as_ref().unchecked_ref(),
                );
            }
        }
        self.state.renderer.borrow_mut().stop();
        self.state.surface.borrow_mut().clear();
    }

    fn install_tick(&self) {
        let weak: Weak<LoopState> = Rc::downgrade(&self.state);
        let closure = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.raf_id.set(None);
            state.frame();
            state.request_frame();
        }) as Box<dyn FnMut()>);
        *self.state.tick.borrow_mut() = Some(closure);
    }

    fn request_frame(&self) {
        self.state.request_frame();
    }

    fn wire_resize(&self) {
        let weak: Weak<LoopState> = Rc::downgrade(&self.state);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(state) = weak.upgrade() {
                let viewport = dom::sync_canvas_to_window(state.surface.borrow().canvas());
                state.renderer.borrow_mut().on_viewport_resize(viewport);
            }
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        *self.state.resize.borrow_mut() = Some(closure);
    }
}

impl LoopState {
    fn frame(&self) {
        let t0 = Instant::now();
        self.renderer
            .borrow_mut()
            .frame(&mut *self.surface.borrow_mut());
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > FRAME_BUDGET_MS {
            let n = self.slow_frames.get() + 1;
            self.slow_frames.set(n);
            if n % SLOW_FRAME_LOG_EVERY == 1 {
                log::debug!("[background] frame took {elapsed_ms:.1}ms ({n} slow frames)");
            }
        }
    }

    fn request_frame(&self) {
        if self.raf_id.get().is_some() {
            return;
        }
        let tick = self.tick.borrow();
        let (Some(tick), Some(w)) = (tick.as_ref(), web::window()) else {
            return;
        };
        match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => log::error!("[background] requestAnimationFrame failed: {:?}", e),
        }
    }
}
