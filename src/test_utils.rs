//! Test utilities for the planet simulation.
//!
//! Provides fixtures for small body systems and assertions for physical
//! invariants such as momentum conservation.

use bevy::color::Color;
use bevy::math::DVec2;

use crate::body::Body;
use crate::physics::{SimulationConfig, SimulationWorld};
use crate::types::{AU_TO_METERS, G};

/// Fixtures for creating test systems.
pub mod fixtures {
    use super::*;

    /// Sun-like anchor at the origin.
    pub fn sun(mass: f64) -> Body {
        Body::new("Sun", DVec2::ZERO, mass, 30.0, Color::WHITE).anchored()
    }

    /// A planet at `distance_au` along `angle` moving at `speed_factor` times
    /// the circular speed around a fixed mass `central_mass`.
    pub fn planet(
        central_mass: f64,
        distance_au: f64,
        angle: f64,
        mass: f64,
        speed_factor: f64,
    ) -> Body {
        let r = distance_au * AU_TO_METERS;
        let v = (G * central_mass / r).sqrt() * speed_factor;
        let dir = DVec2::from_angle(angle);
        Body::new("Planet", dir * r, mass, 10.0, Color::WHITE)
            .with_velocity(dir.perp() * v)
    }

    /// Two-body world with the given config.
    pub fn two_body_world(config: SimulationConfig, sun: Body, planet: Body) -> SimulationWorld {
        let mut world = SimulationWorld::new(config);
        world.add_body(sun);
        world.add_body(planet);
        world
    }
}

/// Assertions for physical invariants.
pub mod assertions {
    use super::*;

    /// Sum of momentum magnitudes, a natural scale for momentum errors.
    pub fn momentum_scale(world: &SimulationWorld) -> f64 {
        world.bodies().iter().map(|b| b.momentum().length()).sum()
    }

    /// Check that two momenta agree to `relative` of `scale`.
    pub fn momentum_conserved(before: DVec2, after: DVec2, scale: f64, relative: f64) -> bool {
        (after - before).length() <= scale * relative
    }
}
