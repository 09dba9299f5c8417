//! Helper functions for creating common widgets.

use bevy::prelude::*;

use crate::theme::{interaction::InteractionPalette, palette::*};

/// A root UI node that fills the window and centers its content.
pub fn ui_root(name: impl Into<String>) -> impl Bundle {
    (
        Name::new(name.into()),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(20.0),
            ..default()
        },
        // Don't block picking events for other UI roots.
        Pickable::IGNORE,
    )
}

/// A large text header.
pub fn header(text: impl Into<String>) -> impl Bundle {
    (
        Name::new("Header"),
        Text::new(text.into()),
        TextFont {
            font_size: 52.0,
            ..default()
        },
        TextColor(HEADER_TEXT),
    )
}

/// A simple text label.
pub fn label(text: impl Into<String>) -> impl Bundle {
    (
        Name::new("Label"),
        Text::new(text.into()),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(LABEL_TEXT),
    )
}

/// A button. Attach a marker or action component alongside and react to
/// [`Interaction::Pressed`] in a screen-local system.
pub fn button(text: impl Into<String>) -> impl Bundle {
    (
        Name::new("Button"),
        Button,
        Node {
            width: Val::Px(280.0),
            height: Val::Px(60.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
        BackgroundColor(BUTTON_BACKGROUND),
        InteractionPalette {
            none: BUTTON_BACKGROUND,
            hovered: BUTTON_HOVERED_BACKGROUND,
            pressed: BUTTON_PRESSED_BACKGROUND,
        },
        children![(
            Text::new(text.into()),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(BUTTON_TEXT),
            // Text inside the button must not catch pointer events.
            Pickable::IGNORE,
        )],
    )
}
