//! Common test utilities for integration tests.

use bevy::color::Color;
use bevy::math::DVec2;
use planet_sim::body::Body;
use planet_sim::physics::{IntegrationOrder, SimulationConfig, SimulationWorld};
use planet_sim::types::AU_TO_METERS;

/// Solar mass used by the reference year-orbit scenario.
pub const SUN_MASS: f64 = 1.9889e30;

/// Earth's initial orbital speed in the reference scenario (m/s).
pub const EARTH_SPEED: f64 = 29_783.0;

/// Sun at the origin plus an Earth at 1 AU moving along +y.
pub fn sun_earth_world(order: IntegrationOrder) -> SimulationWorld {
    let config = SimulationConfig {
        integration_order: order,
        ..SimulationConfig::default()
    };
    let mut world = SimulationWorld::new(config);
    world.add_body(Body::new("Sun", DVec2::ZERO, SUN_MASS, 30.0, Color::WHITE).anchored());
    world.add_body(
        Body::new("Earth", DVec2::new(-AU_TO_METERS, 0.0), 5.9742e24, 16.0, Color::WHITE)
            .with_velocity(DVec2::new(0.0, EARTH_SPEED)),
    );
    world
}

/// Run `steps` physics steps.
pub fn run(world: &mut SimulationWorld, steps: usize) {
    for _ in 0..steps {
        world.step();
    }
}

/// Sum of momentum magnitudes.
pub fn momentum_scale(world: &SimulationWorld) -> f64 {
    world.bodies().iter().map(|b| b.momentum().length()).sum()
}
