mod boss;
mod content;
mod core;
mod level;
mod movement;
mod platforms;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Acrobat".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            platforms::PlatformsPlugin,
            boss::BossPlugin,
            level::LevelPlugin,
        ))
        .run();
}
