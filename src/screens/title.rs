//! The title screen shown at launch.

use bevy::prelude::*;

use crate::{screens::Screen, theme::prelude::*};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Title), spawn_title_screen);
    app.add_systems(Update, handle_title_action.run_if(in_state(Screen::Title)));
}

#[derive(Component, Clone, Copy, PartialEq, Eq)]
enum TitleAction {
    Play,
    Exit,
}

fn spawn_title_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Title Screen"),
        DespawnOnExit(Screen::Title),
        children![
            widget::header("SNEAKLING"),
            widget::label("Keep out of sight. Bushes are your friends."),
            (widget::button("Play"), TitleAction::Play),
            (widget::button("Exit"), TitleAction::Exit),
        ],
    ));
}

fn handle_title_action(
    actions: Query<(&Interaction, &TitleAction), Changed<Interaction>>,
    mut next_screen: ResMut<NextState<Screen>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    for (interaction, action) in &actions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match action {
            TitleAction::Play => next_screen.set(Screen::Loading),
            TitleAction::Exit => {
                app_exit.write(AppExit::Success);
            }
        }
    }
}
