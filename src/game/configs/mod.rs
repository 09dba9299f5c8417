pub mod assets;

use bevy::prelude::*;

pub use assets::{PlayerConfig, PlayerConfigLoader};

pub(super) fn plugin(app: &mut App) {
    // Register the asset loader for RON config files
    app.init_asset::<PlayerConfig>();
    app.init_asset_loader::<PlayerConfigLoader>();

    // Tuning starts at the built-in defaults and is replaced once the file
    // loads, and again whenever it hot-reloads in dev builds.
    app.init_resource::<PlayerConfig>();
    app.add_systems(Startup, load_config);
    app.add_systems(Update, apply_config);
}

#[derive(Resource)]
struct PlayerConfigHandle(Handle<PlayerConfig>);

fn load_config(mut commands: Commands, assets: Res<AssetServer>) {
    commands.insert_resource(PlayerConfigHandle(assets.load(PlayerConfig::PATH)));
}

fn apply_config(
    mut events: MessageReader<AssetEvent<PlayerConfig>>,
    handle: Res<PlayerConfigHandle>,
    configs: Res<Assets<PlayerConfig>>,
    mut commands: Commands,
) {
    for event in events.read() {
        let relevant = match event {
            AssetEvent::LoadedWithDependencies { id } | AssetEvent::Modified { id } => {
                *id == handle.0.id()
            }
            _ => false,
        };
        if relevant {
            if let Some(config) = configs.get(&handle.0) {
                info!("player config loaded");
                commands.insert_resource(config.clone());
            }
        }
    }
}
