//! Action-style input recording: one place turns device state into the
//! move / look / interact values the rest of the game reads.

use bevy::prelude::*;

use crate::AppSystems;

/// The controller's view of the input devices, refreshed every frame.
#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    /// Movement axis. The y component never goes below zero; there is
    /// nothing to do with "down".
    pub move_axis: Vec2,
    /// Look axis. Recorded for aim-style mechanics; nothing consumes it yet.
    pub look: Vec2,
    /// True on the frame the interact action was pressed.
    pub interact_pressed: bool,
}

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<PlayerInput>();
    app.add_systems(Update, record_player_input.in_set(AppSystems::RecordInput));
}

fn record_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<PlayerInput>,
) {
    let mut axis = Vec2::ZERO;
    if keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    let mut look = Vec2::ZERO;
    let mut interact = keyboard.just_pressed(KeyCode::KeyE);

    for gamepad in &gamepads {
        axis += gamepad.left_stick();
        look += gamepad.right_stick();
        interact |= gamepad.just_pressed(GamepadButton::South);
    }

    input.move_axis = clamp_downward(axis);
    input.look = look;
    input.interact_pressed = interact;
}

/// Downward movement input is dropped at the edge.
fn clamp_downward(v: Vec2) -> Vec2 {
    Vec2::new(v.x, v.y.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downward_input_is_clamped_to_zero() {
        assert_eq!(clamp_downward(Vec2::new(0.3, -1.0)), Vec2::new(0.3, 0.0));
        assert_eq!(clamp_downward(Vec2::new(-0.5, -0.2)).y, 0.0);
    }

    #[test]
    fn sideways_and_upward_input_pass_through() {
        assert_eq!(clamp_downward(Vec2::new(-1.0, 0.7)), Vec2::new(-1.0, 0.7));
        assert_eq!(clamp_downward(Vec2::ZERO), Vec2::ZERO);
    }
}
