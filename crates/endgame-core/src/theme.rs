//! Static per-world configuration tables for both background variants.
//!
//! Tables are immutable and looked up by `(RendererVariant, World)`. The
//! particles variant is a field of small glowing dots with a fixed color per
//! element; the worlds variant draws larger decorative shapes and picks a new
//! color from the palette every frame.

use crate::constants::{LINK_LINE_WIDTH, LINK_MAX_ALPHA, LINK_RADIUS_PX, ROTATION_SPEED_SPAN};
use crate::world::World;
use std::fmt;

/// HSL color with saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Same hue at a different saturation/lightness (used for glow and links).
    pub const fn with_sl(self, s: f32, l: f32) -> Self {
        Self { h: self.h, s, l }
    }

    /// CSS color string; alpha of 1.0 is omitted.
    pub fn css(&self, alpha: f32) -> String {
        if alpha >= 1.0 {
            format!("hsl({} {}% {}%)", self.h, self.s, self.l)
        } else {
            format!("hsl({} {}% {}% / {})", self.h, self.s, self.l, alpha.max(0.0))
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css(1.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Dot,
    Cloud,
    Bird,
    SunRay,
    Planet,
    Star,
    Comet,
    Circuit,
    Hexagon,
    Grid,
    Leaf,
    Petal,
    Branch,
}

impl ShapeKind {
    pub fn id(self) -> &'static str {
        match self {
            ShapeKind::Dot => "dot",
            ShapeKind::Cloud => "cloud",
            ShapeKind::Bird => "bird",
            ShapeKind::SunRay => "sun-ray",
            ShapeKind::Planet => "planet",
            ShapeKind::Star => "star",
            ShapeKind::Comet => "comet",
            ShapeKind::Circuit => "circuit",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Grid => "grid",
            ShapeKind::Leaf => "leaf",
            ShapeKind::Petal => "petal",
            ShapeKind::Branch => "branch",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// Color is fixed when the element is created.
    PerElement,
    /// A fresh random palette entry is drawn every frame. Not deterministic
    /// across frames, so tests should only assert structure.
    PerFrame,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkStyle {
    pub radius: f32,
    pub max_alpha: f32,
    pub line_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RendererVariant {
    Particles,
    Worlds,
}

impl RendererVariant {
    /// CSS opacity applied to the whole canvas.
    pub fn canvas_opacity(self) -> f32 {
        match self {
            RendererVariant::Particles => 0.6,
            RendererVariant::Worlds => 0.4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeConfig {
    pub element_count: usize,
    pub element_types: &'static [ShapeKind],
    pub colors: &'static [Hsl],
    pub speed: f32,
    pub size_range: (f32, f32),
    pub opacity_range: (f32, f32),
    pub rotation_span: f32,
    pub color_mode: ColorMode,
    /// Shadow blur applied to dots at high effects.
    pub glow: f64,
    pub links: Option<LinkStyle>,
    /// Chance per frame that a dot is drawn as a petal ellipse.
    pub petal_chance: f32,
}

impl ThemeConfig {
    /// Wrap margin in pixels: the largest visible extent of an element,
    /// including its glow.
    pub fn wrap_margin(&self) -> f32 {
        self.size_range.1 + self.glow as f32
    }

    pub fn allows(&self, kind: ShapeKind) -> bool {
        self.element_types.contains(&kind)
    }
}

const DOTS: &[ShapeKind] = &[ShapeKind::Dot];

const PARTICLE_BASE: ThemeConfig = ThemeConfig {
    element_count: 40,
    element_types: DOTS,
    colors: &[Hsl::new(45.0, 70.0, 60.0)],
    speed: 0.25,
    size_range: (1.0, 3.0),
    opacity_range: (0.1, 0.6),
    rotation_span: 0.0,
    color_mode: ColorMode::PerElement,
    glow: 0.0,
    links: None,
    petal_chance: 0.0,
};

const PARTICLE_GRID: ThemeConfig = ThemeConfig {
    element_count: 50,
    colors: &[
        Hsl::new(280.0, 70.0, 70.0),
        Hsl::new(285.0, 70.0, 70.0),
        Hsl::new(270.0, 70.0, 70.0),
    ],
    speed: 0.3,
    ..PARTICLE_BASE
};

const PARTICLE_SOL: ThemeConfig = ThemeConfig {
    element_count: 40,
    colors: &[
        Hsl::new(45.0, 70.0, 60.0),
        Hsl::new(42.0, 70.0, 60.0),
        Hsl::new(38.0, 70.0, 60.0),
    ],
    ..PARTICLE_BASE
};

const PARTICLE_FLUX: ThemeConfig = ThemeConfig {
    element_count: 80,
    colors: &[
        Hsl::new(180.0, 70.0, 70.0),
        Hsl::new(165.0, 70.0, 70.0),
        Hsl::new(120.0, 70.0, 70.0),
    ],
    speed: 0.5,
    size_range: (1.0, 4.0),
    glow: 10.0,
    links: Some(LinkStyle {
        radius: LINK_RADIUS_PX,
        max_alpha: LINK_MAX_ALPHA,
        line_width: LINK_LINE_WIDTH,
    }),
    ..PARTICLE_BASE
};

const PARTICLE_TERRA: ThemeConfig = ThemeConfig {
    element_count: 30,
    colors: &[
        Hsl::new(120.0, 60.0, 70.0),
        Hsl::new(110.0, 60.0, 70.0),
        Hsl::new(350.0, 60.0, 70.0),
    ],
    speed: 0.2,
    size_range: (2.0, 5.0),
    petal_chance: 0.3,
    ..PARTICLE_BASE
};

const PARTICLE_GLACIS: ThemeConfig = ThemeConfig {
    element_count: 35,
    colors: &[
        Hsl::new(200.0, 70.0, 80.0),
        Hsl::new(195.0, 70.0, 80.0),
        Hsl::new(210.0, 70.0, 80.0),
    ],
    speed: 0.15,
    ..PARTICLE_BASE
};

const WORLD_BASE: ThemeConfig = ThemeConfig {
    element_count: 8,
    element_types: &[ShapeKind::Cloud],
    colors: &[Hsl::new(35.0, 90.0, 60.0)],
    speed: 0.2,
    size_range: (20.0, 60.0),
    opacity_range: (0.1, 0.4),
    rotation_span: ROTATION_SPEED_SPAN,
    color_mode: ColorMode::PerFrame,
    glow: 0.0,
    links: None,
    petal_chance: 0.0,
};

const WORLD_SOL: ThemeConfig = ThemeConfig {
    element_types: &[ShapeKind::Cloud, ShapeKind::Bird, ShapeKind::SunRay],
    colors: &[
        Hsl::new(35.0, 90.0, 60.0),
        Hsl::new(25.0, 95.0, 70.0),
        Hsl::new(200.0, 60.0, 75.0),
    ],
    ..WORLD_BASE
};

const WORLD_GRID: ThemeConfig = ThemeConfig {
    element_count: 12,
    element_types: &[ShapeKind::Planet, ShapeKind::Star, ShapeKind::Comet],
    colors: &[
        Hsl::new(200.0, 100.0, 60.0),
        Hsl::new(240.0, 80.0, 70.0),
        Hsl::new(190.0, 90.0, 65.0),
    ],
    speed: 0.15,
    size_range: (15.0, 45.0),
    ..WORLD_BASE
};

const WORLD_FLUX: ThemeConfig = ThemeConfig {
    element_count: 15,
    element_types: &[ShapeKind::Circuit, ShapeKind::Hexagon, ShapeKind::Grid],
    colors: &[
        Hsl::new(300.0, 100.0, 65.0),
        Hsl::new(320.0, 100.0, 70.0),
        Hsl::new(140.0, 100.0, 60.0),
    ],
    speed: 0.3,
    size_range: (25.0, 50.0),
    ..WORLD_BASE
};

const WORLD_TERRA: ThemeConfig = ThemeConfig {
    element_count: 10,
    element_types: &[ShapeKind::Leaf, ShapeKind::Petal, ShapeKind::Branch],
    colors: &[
        Hsl::new(120.0, 60.0, 40.0),
        Hsl::new(115.0, 70.0, 45.0),
        Hsl::new(25.0, 70.0, 55.0),
    ],
    speed: 0.1,
    size_range: (18.0, 40.0),
    ..WORLD_BASE
};

const WORLD_GLACIS: ThemeConfig = ThemeConfig {
    element_count: 9,
    element_types: &[ShapeKind::Star, ShapeKind::Hexagon, ShapeKind::Cloud],
    colors: &[
        Hsl::new(200.0, 80.0, 85.0),
        Hsl::new(190.0, 70.0, 75.0),
        Hsl::new(210.0, 40.0, 90.0),
    ],
    speed: 0.12,
    size_range: (16.0, 48.0),
    ..WORLD_BASE
};

/// Look up the configuration for a world under the given renderer variant.
pub fn config_for(variant: RendererVariant, world: World) -> &'static ThemeConfig {
    match (variant, world) {
        (RendererVariant::Particles, World::Grid) => &PARTICLE_GRID,
        (RendererVariant::Particles, World::Sol) => &PARTICLE_SOL,
        (RendererVariant::Particles, World::Flux) => &PARTICLE_FLUX,
        (RendererVariant::Particles, World::Terra) => &PARTICLE_TERRA,
        (RendererVariant::Particles, World::Glacis) => &PARTICLE_GLACIS,
        (RendererVariant::Worlds, World::Grid) => &WORLD_GRID,
        (RendererVariant::Worlds, World::Sol) => &WORLD_SOL,
        (RendererVariant::Worlds, World::Flux) => &WORLD_FLUX,
        (RendererVariant::Worlds, World::Terra) => &WORLD_TERRA,
        (RendererVariant::Worlds, World::Glacis) => &WORLD_GLACIS,
    }
}
