//! The gameplay level: platforms to climb, foliage to duck into, a crate to
//! climb inside, and the spikes that make hiding worthwhile.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::{
    game::{
        hiding::{self, HideZone, Hideout},
        player::SpawnPlayer,
    },
    screens::Screen,
};

/// Tag for surfaces the player can stand on.
#[derive(Component)]
pub struct Ground;

/// Touching one of these kills the player.
#[derive(Component)]
pub struct Hazard;

/// Z buckets for sprite layering. Foreground props draw over a hidden player
/// and under a visible one.
pub mod layers {
    pub const BACKGROUND: f32 = 0.0;
    pub const PLATFORMS: f32 = 10.0;
    pub const FOREGROUND: f32 = 30.0;
}

const PLAYER_SPAWN: Vec2 = Vec2::new(-260.0, -80.0);

const BACKGROUND_COLOR: Color = Color::srgb(0.10, 0.11, 0.16);
const PLATFORM_COLOR: Color = Color::srgb(0.25, 0.23, 0.28);
const BUSH_COLOR: Color = Color::srgba(0.18, 0.42, 0.22, 0.9);
const SPIKE_COLOR: Color = Color::srgb(0.62, 0.18, 0.16);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(Screen::Gameplay),
        (spawn_terrain, spawn_level).chain(),
    );
}

pub fn spawn_level(world: &mut World) {
    // The terrain is static; the only dynamic thing in the level is the
    // player.
    SpawnPlayer {
        position: PLAYER_SPAWN,
    }
    .apply(world);
}

fn spawn_terrain(mut commands: Commands) {
    commands.spawn((
        Name::new("Background"),
        Sprite {
            color: BACKGROUND_COLOR,
            custom_size: Some(Vec2::new(3000.0, 1200.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, layers::BACKGROUND),
        DespawnOnExit(Screen::Gameplay),
    ));

    // Walkable surfaces.
    commands.spawn(platform(Vec2::new(0.0, -120.0), Vec2::new(2400.0, 40.0)));
    commands.spawn(platform(Vec2::new(-40.0, -40.0), Vec2::new(200.0, 20.0)));
    commands.spawn(platform(Vec2::new(220.0, 10.0), Vec2::new(160.0, 20.0)));
    commands.spawn(platform(Vec2::new(460.0, 60.0), Vec2::new(160.0, 20.0)));

    // Foliage the player can duck into. The two middle bushes overlap so
    // walking through them stacks their cover.
    commands.spawn(bush(Vec2::new(-140.0, -76.0)));
    commands.spawn(bush(Vec2::new(40.0, -76.0)));
    commands.spawn(bush(Vec2::new(78.0, -76.0)));

    commands.spawn((
        Name::new("Hideout"),
        Hideout::default(),
        Sprite {
            color: hiding::HIDEOUT_VACANT,
            custom_size: Some(Vec2::new(44.0, 56.0)),
            ..default()
        },
        Transform::from_xyz(320.0, -72.0, layers::FOREGROUND),
        RigidBody::Static,
        // Interaction range is a bit wider than the crate itself.
        Collider::rectangle(72.0, 60.0),
        Sensor,
        DespawnOnExit(Screen::Gameplay),
    ));

    commands.spawn((
        Name::new("Spikes"),
        Hazard,
        Sprite {
            color: SPIKE_COLOR,
            custom_size: Some(Vec2::new(90.0, 14.0)),
            ..default()
        },
        Transform::from_xyz(170.0, -94.0, layers::PLATFORMS),
        RigidBody::Static,
        Collider::rectangle(90.0, 14.0),
        Sensor,
        DespawnOnExit(Screen::Gameplay),
    ));
}

fn platform(position: Vec2, size: Vec2) -> impl Bundle {
    (
        Name::new("Platform"),
        Ground,
        Sprite {
            color: PLATFORM_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(layers::PLATFORMS)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        DespawnOnExit(Screen::Gameplay),
    )
}

fn bush(position: Vec2) -> impl Bundle {
    let size = Vec2::new(64.0, 48.0);
    (
        Name::new("Bush"),
        HideZone,
        Sprite {
            color: BUSH_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(layers::FOREGROUND)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Sensor,
        DespawnOnExit(Screen::Gameplay),
    )
}
