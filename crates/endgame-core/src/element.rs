//! Visual elements and their per-frame simulation.

use crate::constants::MAX_ELEMENTS;
use crate::theme::{Hsl, ShapeKind, ThemeConfig};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Drawing surface size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// True when `p` lies inside the viewport grown by `margin` on every side.
    pub fn contains_with_margin(&self, p: Vec2, margin: f32) -> bool {
        p.x >= -margin
            && p.x <= self.width + margin
            && p.y >= -margin
            && p.y <= self.height + margin
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualElement {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub kind: ShapeKind,
    pub color: Hsl,
}

impl VisualElement {
    /// Create one element for `config` with a random position inside `viewport`.
    pub fn spawn<R: Rng>(config: &ThemeConfig, viewport: Viewport, rng: &mut R) -> Self {
        let (size_min, size_max) = config.size_range;
        let (op_min, op_max) = config.opacity_range;
        let kind = *config.element_types.choose(rng).unwrap_or(&ShapeKind::Dot);
        let color = *config
            .colors
            .choose(rng)
            .unwrap_or(&Hsl::new(0.0, 0.0, 100.0));
        Self {
            position: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * config.speed,
                (rng.gen::<f32>() - 0.5) * config.speed,
            ),
            size: size_min + rng.gen::<f32>() * (size_max - size_min),
            opacity: (op_min + rng.gen::<f32>() * (op_max - op_min)).clamp(0.0, 1.0),
            rotation: rng.gen::<f32>() * TAU,
            rotation_speed: (rng.gen::<f32>() - 0.5) * config.rotation_span,
            kind,
            color,
        }
    }

    /// Advance one frame and wrap toroidally over `[-margin, dim + margin]`.
    #[inline]
    pub fn step(&mut self, viewport: Viewport, margin: f32) {
        self.position += self.velocity;
        self.rotation = (self.rotation + self.rotation_speed) % TAU;
        self.position.x = wrap_axis(self.position.x, viewport.width, margin);
        self.position.y = wrap_axis(self.position.y, viewport.height, margin);
    }
}

/// Wrap `v` into `[-margin, extent + margin]`, keeping any overshoot so the
/// motion across the seam stays continuous.
#[inline]
pub fn wrap_axis(v: f32, extent: f32, margin: f32) -> f32 {
    let lo = -margin;
    let hi = extent + margin;
    let span = hi - lo;
    if span <= 0.0 {
        return lo;
    }
    if v < lo {
        (v + span).min(hi)
    } else if v > hi {
        (v - span).max(lo)
    } else {
        v
    }
}

/// Build a fresh batch of `config.element_count` elements (capped at `MAX_ELEMENTS`).
pub fn seed_batch<R: Rng>(
    config: &ThemeConfig,
    viewport: Viewport,
    rng: &mut R,
) -> Vec<VisualElement> {
    (0..config.element_count.min(MAX_ELEMENTS))
        .map(|_| VisualElement::spawn(config, viewport, rng))
        .collect()
}
