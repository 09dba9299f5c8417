mod animation;
mod assets;
mod input;
mod movement;

use avian2d::prelude::*;
use bevy::{audio::Volume, prelude::*};
use rand::Rng;

pub use assets::PlayerAssets;
pub use input::PlayerInput;

use crate::{
    AppSystems,
    asset_tracking::LoadResource,
    audio::{music, sound_effect},
    game::{
        FixedSystems,
        configs::PlayerConfig,
        contacts::ContactEvents,
        hiding::{Hiding, RenderBucket},
        level::Hazard,
    },
    screens::Screen,
};

// Player marker component
#[derive(Component)]
pub struct Player;

/// Movement state. Tuning lives in [`PlayerConfig`]; this is only what
/// changes at runtime.
#[derive(Component)]
pub struct MovementController {
    /// Smoothing accumulator for the horizontal velocity approach.
    pub velocity_damp: f32,
    /// Eligibility to jump. Consumed by jumping, restored by a qualifying
    /// ground contact.
    pub is_grounded: bool,
    pub is_facing_right: bool,
}

impl Default for MovementController {
    fn default() -> Self {
        Self {
            velocity_damp: 0.0,
            is_grounded: true,
            is_facing_right: true,
        }
    }
}

/// The live player entity, registered by the spawn command so collaborators
/// don't need a world scan. Goes stale when the scene is torn down; holders
/// must tolerate the lookup failing.
#[derive(Resource)]
pub struct PlayerHandle(pub Entity);

/// The player touched something lethal this tick.
#[derive(Message)]
pub struct PlayerDied;

/// Marker for the looping footstep audio attached to the player.
#[derive(Component)]
struct FootstepAudio;

// Constants
pub const PLAYER_SIZE: Vec2 = Vec2::new(18.0, 30.0);
const PLAYER_COLOR: Color = Color::srgb(0.85, 0.82, 0.70);
const GRAVITY: f32 = 1300.0;

// Player spawn command
pub struct SpawnPlayer {
    pub position: Vec2,
}

impl Command for SpawnPlayer {
    fn apply(self, world: &mut World) {
        let _ = world.run_system_cached_with(spawn_player, self);
    }
}

fn spawn_player(
    In(spawn): In<SpawnPlayer>,
    mut commands: Commands,
    player_assets: Res<PlayerAssets>,
) {
    let entity = commands
        .spawn((
            Name::new("Player"),
            Player,
            MovementController::default(),
            Hiding::default(),
            ContactEvents::default(),
            DespawnOnExit(Screen::Gameplay),
            Sprite {
                color: PLAYER_COLOR,
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(spawn.position.extend(RenderBucket::Default.z())),
        ))
        .insert((
            // Avian physics components
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_SIZE.x / 2.0, PLAYER_SIZE.y - PLAYER_SIZE.x),
            LockedAxes::ROTATION_LOCKED,
            Friction::ZERO,
            Restitution::ZERO,
            CollisionEventsEnabled,
            CollidingEntities::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Footsteps"),
                FootstepAudio,
                music(player_assets.footsteps.clone(), 0.0),
            ));
        })
        .id();

    commands.insert_resource(PlayerHandle(entity));
}

pub(super) fn plugin(app: &mut App) {
    app.load_resource::<PlayerAssets>();
    app.add_message::<PlayerDied>();

    // Stronger gravity than the default for a snappier jump arc.
    app.insert_resource(Gravity(Vec2::NEG_Y * GRAVITY));

    app.add_plugins((animation::plugin, input::plugin));

    app.add_systems(
        FixedUpdate,
        (
            (movement::update_grounded, detect_hazards).in_set(FixedSystems::React),
            movement::apply_movement.in_set(FixedSystems::Move),
        )
            .run_if(in_state(Screen::Gameplay)),
    );

    app.add_systems(
        Update,
        update_footsteps
            .in_set(AppSystems::Update)
            .run_if(in_state(Screen::Gameplay)),
    );
}

fn detect_hazards(
    hazards: Query<(), With<Hazard>>,
    players: Query<&ContactEvents, With<Player>>,
    player_assets: Res<PlayerAssets>,
    mut deaths: MessageWriter<PlayerDied>,
    mut commands: Commands,
) {
    for contacts in &players {
        if contacts
            .entered
            .iter()
            .any(|&entity| hazards.get(entity).is_ok())
        {
            info!("player died");
            commands.spawn(sound_effect(player_assets.death.clone()));
            deaths.write(PlayerDied);
        }
    }
}

/// Moving fast enough to be heard: full footstep volume past the noise gate,
/// silence below it.
fn update_footsteps(
    input: Res<PlayerInput>,
    config: Res<PlayerConfig>,
    mut sinks: Query<&mut AudioSink, With<FootstepAudio>>,
    mut was_audible: Local<bool>,
) {
    let audible = input.move_axis.length_squared() >= config.noise_gate;
    for mut sink in &mut sinks {
        sink.set_volume(Volume::Linear(if audible { 1.0 } else { 0.0 }));
        if audible && !*was_audible {
            sink.set_speed(rand::rng().random_range(0.92..1.08));
        }
    }
    *was_audible = audible;
}
