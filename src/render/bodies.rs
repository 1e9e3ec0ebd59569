//! Body discs.
//!
//! One circle mesh per body, spawned when the simulation screen is shown and
//! despawned when it is left. The physics world stays the source of truth.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::CameraState;
use crate::physics::SimulationWorld;
use crate::render::{to_view, window_center, z_layers};
use crate::types::{AppScreen, FrameSet};

/// Smallest disc radius in pixels, so far zoom-outs keep bodies visible.
pub const MIN_DISC_RADIUS: f32 = 1.0;

/// Links a disc entity to its body in [`SimulationWorld`].
#[derive(Component)]
pub struct BodyVisual {
    pub index: usize,
}

/// Plugin providing body disc spawning and placement.
pub struct BodyVisualPlugin;

impl Plugin for BodyVisualPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnExit(AppScreen::Simulation), despawn_body_visuals)
            .add_systems(
                Update,
                (spawn_body_visuals, sync_body_visuals)
                    .chain()
                    .in_set(FrameSet::Render)
                    .run_if(in_state(AppScreen::Simulation))
                    .run_if(resource_exists::<SimulationWorld>)
                    .run_if(resource_exists::<CameraState>),
            );
    }
}

/// Disc radius in pixels for a body of display radius `radius`.
pub fn disc_radius(radius: f32, zoom_ratio: f64) -> f32 {
    (radius * zoom_ratio as f32).max(MIN_DISC_RADIUS)
}

/// Spawn discs for every body if none exist yet.
fn spawn_body_visuals(
    mut commands: Commands,
    existing: Query<(), With<BodyVisual>>,
    world: Res<SimulationWorld>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !existing.is_empty() {
        return;
    }

    // Unit circle, sized through the transform scale
    let mesh = meshes.add(Circle::new(1.0));

    for (index, body) in world.bodies().iter().enumerate() {
        commands.spawn((
            Mesh2d(mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(body.color))),
            Transform::from_xyz(0.0, 0.0, z_layers::BODY),
            BodyVisual { index },
        ));
    }

    info!("Spawned {} body discs", world.bodies().len());
}

fn despawn_body_visuals(mut commands: Commands, visuals: Query<Entity, With<BodyVisual>>) {
    for entity in &visuals {
        commands.entity(entity).despawn();
    }
}

/// Place and size every disc from the current physics state and camera.
fn sync_body_visuals(
    world: Res<SimulationWorld>,
    camera: Res<CameraState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut visuals: Query<(&BodyVisual, &mut Transform)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let center = window_center(window);
    let size = window.size();
    let zoom_ratio = camera.zoom_ratio();

    for (visual, mut transform) in &mut visuals {
        let Some(body) = world.bodies().get(visual.index) else {
            continue;
        };
        let screen = camera.world_to_screen(body.position, center);
        transform.translation = to_view(screen, size).extend(z_layers::BODY);
        transform.scale = Vec3::splat(disc_radius(body.radius, zoom_ratio));
    }
}
