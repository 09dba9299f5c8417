use bevy::{audio::Volume, prelude::*};

pub(crate) fn plugin(app: &mut App) {
    app.register_type::<Music>();
    app.register_type::<SoundEffect>();
}

/// An organizational marker component for looping background audio
/// (music, ambient loops).
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub(crate) struct Music;

/// A looping audio instance, e.g. the footstep loop.
pub(crate) fn music(handle: Handle<AudioSource>, volume: f32) -> impl Bundle {
    (
        Music,
        AudioPlayer(handle),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(volume)),
    )
}

/// An organizational marker component for one-shot sound effects.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub(crate) struct SoundEffect;

/// A fire-and-forget audio instance that despawns itself when done playing.
pub(crate) fn sound_effect(handle: Handle<AudioSource>) -> impl Bundle {
    (SoundEffect, AudioPlayer(handle), PlaybackSettings::DESPAWN)
}
