use std::time::Duration;

// Shared tuning constants for the background engine and travel sequence.

// Travel phase holds
pub const DEPART_HOLD: Duration = Duration::from_millis(300);
pub const TRAVERSE_HOLD: Duration = Duration::from_millis(1200);
pub const ARRIVE_HOLD: Duration = Duration::from_millis(1000);

// Element batches
pub const MAX_ELEMENTS: usize = 80; // caps the O(n^2) link pass per frame
pub const ROTATION_SPEED_SPAN: f32 = 0.02; // worlds variant: (rand - 0.5) * span rad/frame

// Connective links (particles variant, flux)
pub const LINK_RADIUS_PX: f32 = 100.0;
pub const LINK_MAX_ALPHA: f32 = 0.2;
pub const LINK_LINE_WIDTH: f64 = 0.5;

// Preference storage
pub const THEME_KEY: &str = "endgame-theme";
pub const IMMERSIVE_KEY: &str = "endgame-immersive";

// Audio
pub const DEFAULT_AUDIO_VOLUME: f32 = 0.3;
pub const MAX_AUDIO_VOLUME: f32 = 0.8;
