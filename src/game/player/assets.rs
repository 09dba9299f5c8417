use bevy::prelude::*;

/// Resource holding handles to the player's audio
#[derive(Resource, Asset, Reflect, Clone)]
pub struct PlayerAssets {
    #[dependency]
    pub footsteps: Handle<AudioSource>,
    #[dependency]
    pub jump: Handle<AudioSource>,
    #[dependency]
    pub death: Handle<AudioSource>,
}

impl PlayerAssets {
    pub const PATH_FOOTSTEPS: &'static str = "audio/sfx/footsteps.ogg";
    pub const PATH_JUMP: &'static str = "audio/sfx/jump.ogg";
    pub const PATH_DEATH: &'static str = "audio/sfx/death.ogg";
}

impl FromWorld for PlayerAssets {
    fn from_world(world: &mut World) -> Self {
        let assets = world.resource::<AssetServer>();
        Self {
            footsteps: assets.load(Self::PATH_FOOTSTEPS),
            jump: assets.load(Self::PATH_JUMP),
            death: assets.load(Self::PATH_DEATH),
        }
    }
}
