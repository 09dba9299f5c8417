//! The gameplay scene and everything in it.

mod camera;
mod configs;
mod contacts;
pub mod hiding;
mod level;
pub mod player;

use avian2d::prelude::*;
use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default());

    app.configure_sets(
        FixedUpdate,
        (
            FixedSystems::Contacts,
            FixedSystems::React,
            FixedSystems::Move,
        )
            .chain(),
    );

    app.add_plugins((
        configs::plugin,
        level::plugin,
        camera::plugin,
        contacts::plugin,
        hiding::plugin,
        player::plugin,
    ));
}

/// Fixed-tick gameplay phases: contact edges are computed first, reactions to
/// them (grounding, zone membership, hazards) second, movement integration
/// last.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FixedSystems {
    Contacts,
    React,
    Move,
}
