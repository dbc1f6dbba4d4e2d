//! The closed set of worlds (themes) and the effects level setting.

use crate::error::ParseWorldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named visual identity. The lowercase id is used for storage and DOM markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum World {
    #[default]
    Grid,
    Sol,
    Flux,
    Terra,
    Glacis,
}

impl World {
    pub const ALL: [World; 5] = [
        World::Grid,
        World::Sol,
        World::Flux,
        World::Terra,
        World::Glacis,
    ];

    pub fn id(self) -> &'static str {
        match self {
            World::Grid => "grid",
            World::Sol => "sol",
            World::Flux => "flux",
            World::Terra => "terra",
            World::Glacis => "glacis",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            World::Grid => "Grid",
            World::Sol => "Sol",
            World::Flux => "Flux",
            World::Terra => "Terra",
            World::Glacis => "Glacis",
        }
    }

    /// Parse a stored id, falling back to the default world on anything unknown.
    pub fn from_stored(raw: Option<&str>) -> World {
        match raw {
            Some(s) => s.parse().unwrap_or_else(|e: ParseWorldError| {
                log::warn!("[theme] {e}; using {}", World::default());
                World::default()
            }),
            None => World::default(),
        }
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for World {
    type Err = ParseWorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        World::ALL
            .into_iter()
            .find(|w| w.id() == s)
            .ok_or_else(|| ParseWorldError(s.to_string()))
    }
}

/// Visual effects budget. `Low` drops glow and connective links.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectsLevel {
    Low,
    #[default]
    High,
}

impl EffectsLevel {
    pub fn is_high(self) -> bool {
        matches!(self, EffectsLevel::High)
    }
}
