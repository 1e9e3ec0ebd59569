//! Simulation control panel in the top-left corner.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::camera::CameraState;
use crate::physics::SimulationWorld;
use crate::types::{AppScreen, ControlCommand};

/// What a panel button does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    Command(ControlCommand),
    BackToMenu,
}

/// Buttons shown in the panel, top to bottom.
pub const PANEL_BUTTONS: &[(&str, &str, PanelAction)] = &[
    (
        "Double Speed",
        "Double the time step (])",
        PanelAction::Command(ControlCommand::DoubleSpeed),
    ),
    (
        "Half Speed",
        "Halve the time step ([)",
        PanelAction::Command(ControlCommand::HalfSpeed),
    ),
    (
        "Reset Position",
        "Move the view back to the Sun (R)",
        PanelAction::Command(ControlCommand::ResetOffset),
    ),
    ("Menu", "Back to the main menu (Esc)", PanelAction::BackToMenu),
];

/// System that renders the control panel.
pub fn control_panel(
    mut contexts: EguiContexts,
    world: Res<SimulationWorld>,
    camera: Res<CameraState>,
    mut commands: MessageWriter<ControlCommand>,
    mut next_screen: ResMut<NextState<AppScreen>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Controls")
        .default_pos(egui::pos2(10.0, 40.0))
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            for (label, hint, action) in PANEL_BUTTONS {
                let button = egui::Button::new(*label).min_size(egui::vec2(200.0, 30.0));
                if !ui.add(button).on_hover_text(*hint).clicked() {
                    continue;
                }
                match action {
                    PanelAction::Command(command) => {
                        commands.write(*command);
                    }
                    PanelAction::BackToMenu => {
                        info!("Returning to menu");
                        next_screen.set(AppScreen::Menu);
                    }
                }
            }

            ui.separator();

            ui.label(
                egui::RichText::new(format!("Scale: {:.3e} px/m", camera.current_scale()))
                    .monospace(),
            );
            ui.label(
                egui::RichText::new(format!("Time step: {:.1} s", world.time_step())).monospace(),
            );
            ui.label(
                egui::RichText::new(format!(
                    "1 second = {:.2} days",
                    world.days_per_real_second()
                ))
                .monospace(),
            );
            ui.label(
                egui::RichText::new(format!("Elapsed: {:.0} days", world.elapsed_days()))
                    .monospace(),
            );
        });
}
