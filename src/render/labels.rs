//! Distance labels using egui for text rendering.
//!
//! Every non-anchor body shows its distance to the anchor, centered on the
//! body.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::camera::CameraState;
use crate::physics::SimulationWorld;
use crate::render::window_center;
use crate::types::AppScreen;

/// Plugin providing distance label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>().add_systems(
            EguiPrimaryContextPass,
            draw_distance_labels
                .run_if(in_state(AppScreen::Simulation))
                .run_if(resource_exists::<SimulationWorld>)
                .run_if(resource_exists::<CameraState>),
        );
    }
}

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Font size in points.
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            font_size: 14.0,
        }
    }
}

/// Format a distance in meters as whole kilometres, truncated.
pub fn format_distance_km(meters: f64) -> String {
    format!("{} km", (meters / 1000.0).trunc() as i64)
}

fn draw_distance_labels(
    mut contexts: EguiContexts,
    world: Res<SimulationWorld>,
    camera: Res<CameraState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let center = window_center(window);
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("distance_labels"),
    ));
    let font = egui::FontId::proportional(settings.font_size);

    for body in world.bodies().iter().filter(|b| !b.is_anchor) {
        let screen = camera.world_to_screen(body.position, center);
        painter.text(
            egui::pos2(screen.x as f32, screen.y as f32),
            egui::Align2::CENTER_CENTER,
            format_distance_km(body.last_distance_to_primary),
            font.clone(),
            egui::Color32::WHITE,
        );
    }
}
