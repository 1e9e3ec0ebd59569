//! Physics simulation for the planet system.
//!
//! Pairwise Newtonian gravity integrated with explicit Euler, one step per
//! rendered frame. The world is created the first time the simulation screen
//! is entered and then kept for the rest of the run.

mod gravity;
mod integrator;
mod world;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::attraction;
pub use integrator::{net_force, step_bodies, update_position, IntegrationOrder};
pub use world::SimulationWorld;

use crate::types::{
    configure_frame_sets, AppScreen, ControlCommand, FrameSet, AU_TO_METERS, G, SECONDS_PER_DAY,
    TRAIL_LENGTH,
};

/// Recoverable failures inside the physics core.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("bodies {a} and {b} are coincident")]
    DegenerateDistance { a: String, b: String },

    #[error("time step {requested} s is below the floor of {floor} s")]
    InvalidTimeStep { requested: f64, floor: f64 },

    #[error("invalid speed factor: {0}")]
    InvalidSpeedFactor(f64),

    #[error("invalid simulation config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}

/// Configuration for the simulation world.
#[derive(Resource, Clone, Debug)]
pub struct SimulationConfig {
    /// Gravitational constant. Default: 6.67428e-11.
    pub gravitational_constant: f64,
    /// Meters per astronomical unit, used to place catalog bodies.
    pub astronomical_unit: f64,
    /// Time step at creation in seconds. Default: 86400 (1 day).
    pub initial_time_step: f64,
    /// Smallest allowed time step in seconds. Default: 0.1.
    pub min_time_step: f64,
    /// Positions kept per trail. Default: 100.
    pub trail_length: usize,
    /// Force/integration interleaving. Default: snapshot.
    pub integration_order: IntegrationOrder,
    /// Assumed frame rate for the "days per second" readout. Default: 60.
    pub frames_per_second: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            astronomical_unit: AU_TO_METERS,
            initial_time_step: SECONDS_PER_DAY,
            min_time_step: 0.1,
            trail_length: TRAIL_LENGTH,
            integration_order: IntegrationOrder::Snapshot,
            frames_per_second: 60.0,
        }
    }
}

impl SimulationConfig {
    /// Check that every tunable is finite and that the step and its floor are
    /// strictly positive.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let positive = [
            ("astronomical_unit", self.astronomical_unit),
            ("initial_time_step", self.initial_time_step),
            ("min_time_step", self.min_time_step),
            ("frames_per_second", self.frames_per_second),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PhysicsError::InvalidConfig { field, value });
            }
        }
        if !self.gravitational_constant.is_finite() {
            return Err(PhysicsError::InvalidConfig {
                field: "gravitational_constant",
                value: self.gravitational_constant,
            });
        }
        Ok(())
    }
}

/// Plugin providing world creation and the per-frame physics step.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        configure_frame_sets(app);
        app.init_resource::<SimulationConfig>()
            .add_message::<ControlCommand>()
            .add_systems(OnEnter(AppScreen::Simulation), create_world)
            .add_systems(
                Update,
                (apply_speed_commands, physics_step)
                    .chain()
                    .in_set(FrameSet::Physics)
                    .run_if(in_state(AppScreen::Simulation))
                    .run_if(resource_exists::<SimulationWorld>),
            );
    }
}

/// Build the world on first entry to the simulation screen.
///
/// Later visits reuse the existing world so orbits continue where they left off.
fn create_world(
    mut commands: Commands,
    existing: Option<Res<SimulationWorld>>,
    config: Res<SimulationConfig>,
) {
    if existing.is_some() {
        return;
    }

    let world = SimulationWorld::solar_system(config.clone());
    info!("Created simulation world with {} bodies", world.bodies().len());
    commands.insert_resource(world);
}

/// Apply pending speed commands before stepping.
fn apply_speed_commands(
    mut commands: MessageReader<ControlCommand>,
    mut world: ResMut<SimulationWorld>,
) {
    for command in commands.read() {
        let Some(factor) = command.speed_factor() else {
            continue;
        };
        match world.set_speed_multiplier(factor) {
            Ok(step) => info!("Time step: {step} s ({:.2} days/s)", world.days_per_real_second()),
            Err(err) => warn!("Ignoring speed change: {err}"),
        }
    }
}

/// Advance the world by exactly one step per frame.
fn physics_step(mut world: ResMut<SimulationWorld>) {
    world.step();
}
