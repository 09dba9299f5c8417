use bevy::{
    asset::{AssetLoader, AsyncReadExt, LoadContext},
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Author-time tuning for the player controller, loaded from a RON file.
#[derive(Asset, Resource, Reflect, Clone, Debug, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Horizontal speed at full stick deflection, in world units per second.
    pub move_speed: f32,
    /// Upward velocity applied by a jump.
    pub jump_impulse: f32,
    /// Time constant of the velocity smoothing, in seconds.
    pub smooth_time: f32,
    /// Duration of the facing-flip scale animation, in seconds.
    pub flip_duration: f32,
    /// Squared input magnitude at which footsteps become audible.
    pub noise_gate: f32,
    /// Squared input magnitude above which movement breaks active hiding.
    pub unhide_deadzone: f32,
    /// Vertical input at or above which a grounded player jumps.
    pub jump_threshold: f32,
}

impl PlayerConfig {
    /// Path to the player configuration file
    pub const PATH: &'static str = "config/player.ron";
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 140.0,
            jump_impulse: 420.0,
            smooth_time: 0.05,
            flip_duration: 0.2,
            noise_gate: 0.25,
            unhide_deadzone: 0.5,
            jump_threshold: 0.5,
        }
    }
}

/// Asset loader for PlayerConfig RON files
#[derive(Default)]
pub struct PlayerConfigLoader;

impl AssetLoader for PlayerConfigLoader {
    type Asset = PlayerConfig;
    type Settings = ();
    type Error = anyhow::Error;

    async fn load(
        &self,
        reader: &mut dyn bevy::asset::io::Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let config: PlayerConfig = ron::de::from_bytes(&bytes)?;
        Ok(config)
    }

    fn extensions(&self) -> &[&str] {
        &["ron"]
    }
}
