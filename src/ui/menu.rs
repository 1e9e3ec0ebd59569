//! Main menu screen.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::types::AppScreen;

/// Full-window menu with start and quit buttons.
pub fn main_menu(
    mut contexts: EguiContexts,
    mut next_screen: ResMut<NextState<AppScreen>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.heading("Planet Simulation");
            ui.add_space(24.0);

            let size = egui::vec2(200.0, 30.0);
            if ui
                .add(egui::Button::new("Start Simulation").min_size(size))
                .clicked()
            {
                info!("Entering simulation");
                next_screen.set(AppScreen::Simulation);
            }
            ui.add_space(8.0);
            if ui.add(egui::Button::new("Quit").min_size(size)).clicked() {
                exit.write(AppExit::Success);
            }
        });
    });
}
