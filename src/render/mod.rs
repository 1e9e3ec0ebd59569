//! Rendering systems for the planet simulator.
//!
//! Bodies are 2D meshes repositioned every frame, trails are gizmo
//! polylines and distance labels are painted with egui. Everything reads the
//! world through [`crate::camera::CameraState::world_to_screen`], which works in window
//! pixels (origin top-left, y down); [`to_view`] converts that into Bevy's
//! centered, y-up 2D space.

pub mod bodies;
mod labels;
mod orbits;

use bevy::math::DVec2;
use bevy::prelude::*;

use self::bodies::BodyVisualPlugin;
use self::labels::LabelPlugin;
use self::orbits::TrailPlugin;

pub use self::labels::{format_distance_km, LabelSettings};
pub use self::orbits::TrailSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodyVisualPlugin, TrailPlugin, LabelPlugin));
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Sun and planets, above the trail gizmos.
    pub const BODY: f32 = 2.0;
}

/// Window center in logical pixels.
pub fn window_center(window: &Window) -> DVec2 {
    DVec2::new(window.width() as f64 * 0.5, window.height() as f64 * 0.5)
}

/// Convert window pixels (top-left origin, y down) to Bevy 2D view space.
pub fn to_view(screen: DVec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        screen.x as f32 - window_size.x * 0.5,
        window_size.y * 0.5 - screen.y as f32,
    )
}
