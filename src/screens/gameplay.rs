//! The screen state for the main gameplay.

use bevy::{input::common_conditions::input_just_pressed, prelude::*};

use crate::{game::player::PlayerDied, screens::Screen};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            return_to_title_screen
                .run_if(in_state(Screen::Gameplay).and(input_just_pressed(KeyCode::Escape))),
            reload_on_death.run_if(in_state(Screen::Gameplay)),
        ),
    );
}

fn return_to_title_screen(mut next_screen: ResMut<NextState<Screen>>) {
    next_screen.set(Screen::Title);
}

/// Death restarts the whole level: leaving `Screen::Gameplay` tears the scene
/// down, and coming back through `Loading` builds a fresh one. Nothing is
/// reset field by field.
fn reload_on_death(
    mut deaths: MessageReader<PlayerDied>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if deaths.read().next().is_some() {
        next_screen.set(Screen::Loading);
    }
}
