//! Orbit trail rendering using Bevy Gizmos.
//!
//! Each body's bounded position history is drawn as an open polyline in the
//! body's color, through the same camera transform as the discs.

use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::CameraState;
use crate::physics::SimulationWorld;
use crate::render::{to_view, window_center};
use crate::types::{AppScreen, FrameSet};

/// Plugin providing orbit trail visualization.
pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrailSettings>().add_systems(
            Update,
            draw_trails
                .in_set(FrameSet::Render)
                .run_if(in_state(AppScreen::Simulation))
                .run_if(resource_exists::<SimulationWorld>)
                .run_if(resource_exists::<CameraState>),
        );
    }
}

/// Settings for trail rendering.
#[derive(Resource)]
pub struct TrailSettings {
    /// Whether to show trails.
    pub visible: bool,
    /// Alpha value for trail color.
    pub alpha: f32,
    /// Trails with this many points or fewer are not drawn.
    pub min_points: usize,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: 1.0,
            min_points: 2,
        }
    }
}

fn draw_trails(
    mut gizmos: Gizmos,
    settings: Res<TrailSettings>,
    world: Res<SimulationWorld>,
    camera: Res<CameraState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if !settings.visible {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let center = window_center(window);
    let size = window.size();

    for body in world.bodies() {
        if body.trail_len() <= settings.min_points {
            continue;
        }
        let points = body
            .trail()
            .map(|pos| to_view(camera.world_to_screen(pos, center), size));
        gizmos.linestrip_2d(points, body.color.with_alpha(settings.alpha));
    }
}
