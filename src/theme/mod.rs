//! Reusable UI widgets and theming.

// Unused widget variants are fine to keep around.
#![allow(dead_code)]

pub mod interaction;
pub mod palette;
pub mod widget;

pub mod prelude {
    pub use super::{interaction::InteractionPalette, palette as ui_palette, widget};
}

use bevy::prelude::*;

pub(crate) fn plugin(app: &mut App) {
    app.add_plugins(interaction::plugin);
}
