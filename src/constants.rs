// DOM names and assets used by the web front end.
// Kept free of web-sys types so host tests can include this file directly.

// Canvas elements (either may be absent from a page)
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const WORLD_CANVAS_ID: &str = "world-canvas";
pub const PLANET_OVERLAY_ID: &str = "planet-overlay";

// <html> attributes
pub const THEME_ATTR: &str = "data-theme";
pub const IMMERSIVE_ATTR: &str = "data-immersive";
pub const IMMERSIVE_ON: &str = "on";
pub const PLANET_ATTR: &str = "data-planet";

// Overlay classes
pub const OVERLAY_WORLD_PREFIX: &str = "overlay-"; // followed by the world id
pub const OVERLAY_DRIFT_CLASS: &str = "drift"; // animated layers at high effects
pub const HIDDEN_CLASS: &str = "hidden";

// Audio
pub const WARP_CUE_URL: &str = "/immersive/fx-warp.mp3";

// Frame budget used for slow-frame diagnostics (60 Hz)
pub const FRAME_BUDGET_MS: f64 = 16.7;
pub const SLOW_FRAME_LOG_EVERY: u32 = 120; // log at most once per this many slow frames

/// Class name applied to the overlay for a world id.
pub fn overlay_class(world_id: &str) -> String {
    format!("{OVERLAY_WORLD_PREFIX}{world_id}")
}
