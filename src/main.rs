//! Planet Sim - 2D Orbital Mechanics Visualizer
//!
//! A desktop application showing the Sun and planets under Newtonian gravity,
//! with pan, smooth zoom and speed controls.

use bevy::{prelude::*, window::WindowResolution};
use bevy_egui::EguiPlugin;

use planet_sim::camera::CameraPlugin;
use planet_sim::input::InputPlugin;
use planet_sim::physics::PhysicsPlugin;
use planet_sim::render::RenderPlugin;
use planet_sim::types::AppScreen;
use planet_sim::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Simulation".into(),
                resolution: WindowResolution::new(1280, 720),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // States must exist before plugins register OnEnter/OnExit systems
        .init_state::<AppScreen>()
        // Add simulation plugins
        .add_plugins((PhysicsPlugin, CameraPlugin, InputPlugin, RenderPlugin, UiPlugin))
        .run();
}
