//! Process-wide presentation markers.
//!
//! This is the only channel through which the coordinator and the theme
//! selection tell independent visual collaborators (overlays, CSS) what is
//! going on. On the web these are attributes and classes on `<html>`.

use crate::world::World;

/// Transient marker set while a travel phase is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseMarker {
    Depart,
    Traverse,
    Arrive,
}

impl PhaseMarker {
    pub const ALL: [PhaseMarker; 3] = [PhaseMarker::Depart, PhaseMarker::Traverse, PhaseMarker::Arrive];

    pub fn class_name(self) -> &'static str {
        match self {
            PhaseMarker::Depart => "depart",
            PhaseMarker::Traverse => "traverse",
            PhaseMarker::Arrive => "arrive",
        }
    }
}

pub trait ModeMarkers {
    fn set_theme(&self, world: World);
    fn set_immersive(&self, on: bool);
    /// `None` removes the marker.
    fn set_world(&self, world: Option<World>);
    fn set_phase(&self, marker: PhaseMarker, on: bool);
}
