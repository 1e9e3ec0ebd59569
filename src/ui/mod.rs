//! UI module providing the egui-based control surface.

mod menu;
pub mod time_controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::camera::CameraState;
use crate::physics::SimulationWorld;
use crate::types::{AppScreen, ControlCommand};

pub use time_controls::{PanelAction, PANEL_BUTTONS};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ControlCommand>()
            .add_systems(
                EguiPrimaryContextPass,
                menu::main_menu.run_if(in_state(AppScreen::Menu)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                time_controls::control_panel
                    .run_if(in_state(AppScreen::Simulation))
                    .run_if(resource_exists::<SimulationWorld>)
                    .run_if(resource_exists::<CameraState>),
            );
    }
}
