//! Bevy plugin for an on-screen virtual analog stick driven by mouse or
//! touch. The mapping itself lives in `stick_core`; this crate supplies the
//! pointer sessions, UI nodes, and output events around it.

use bevy::prelude::*;

mod input;
mod stick;
mod surface;
mod systems;

pub use stick::{
    spawn_stick, OnScreenStick, StickBackground, StickInput, StickKnob, StickSession, StickValue,
    StickVisuals,
};
pub use stick_core::{AxisOptions, ConfigError, StickConfig, StickMapper, StickType};

pub struct OnScreenStickPlugin;

impl Plugin for OnScreenStickPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<StickInput>().add_systems(
            Update,
            (systems::drive_sticks, systems::apply_stick_visuals).chain(),
        );
    }
}
