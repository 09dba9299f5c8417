use bevy::prelude::*;

pub const HEADER_TEXT: Color = Color::srgb(0.855, 0.835, 0.702);
pub const LABEL_TEXT: Color = Color::srgb(0.624, 0.647, 0.698);
pub const BUTTON_TEXT: Color = Color::srgb(0.925, 0.925, 0.925);

pub const BUTTON_BACKGROUND: Color = Color::srgb(0.231, 0.282, 0.400);
pub const BUTTON_HOVERED_BACKGROUND: Color = Color::srgb(0.306, 0.365, 0.506);
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::srgb(0.176, 0.212, 0.298);
