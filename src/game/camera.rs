//! Camera follow for the side-scrolling level.

use bevy::prelude::*;

use crate::{AppSystems, game::player::PlayerHandle, screens::Screen};

const FOLLOW_RATE: f32 = 5.0;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        follow_player
            .in_set(AppSystems::Update)
            .run_if(in_state(Screen::Gameplay)),
    );
}

fn follow_player(
    player: Option<Res<PlayerHandle>>,
    transforms: Query<&Transform, Without<Camera2d>>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
    time: Res<Time>,
) {
    let Some(player) = player else {
        return;
    };
    let Ok(target) = transforms.get(player.0) else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };
    let goal = target.translation.truncate().extend(camera.translation.z);
    let rate = (FOLLOW_RATE * time.delta_secs()).min(1.0);
    camera.translation = camera.translation.lerp(goal, rate);
}
