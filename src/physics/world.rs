//! The simulation world: owned bodies plus the global time step.

use bevy::math::DVec2;
use bevy::prelude::*;

use super::integrator::step_bodies;
use super::{PhysicsError, SimulationConfig};
use crate::body::Body;
use crate::catalog::{CatalogEntry, SOLAR_SYSTEM};
use crate::types::SECONDS_PER_DAY;

/// Resource owning every body in the simulation.
///
/// The body list keeps insertion order, which fixes the summation order of
/// forces and makes runs reproducible.
#[derive(Resource, Clone, Debug)]
pub struct SimulationWorld {
    bodies: Vec<Body>,
    /// Seconds simulated per step. Always at least `config.min_time_step`.
    time_step: f64,
    config: SimulationConfig,
    elapsed: f64,
    steps: u64,
}

impl SimulationWorld {
    /// Create an empty world.
    ///
    /// An invalid config is replaced by [`SimulationConfig::default`].
    pub fn new(config: SimulationConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("{err}, using default simulation config");
                SimulationConfig::default()
            }
        };
        let time_step = config.initial_time_step.max(config.min_time_step);
        Self {
            bodies: Vec::new(),
            time_step,
            config,
            elapsed: 0.0,
            steps: 0,
        }
    }

    /// Create a world populated from catalog entries, in catalog order.
    pub fn from_catalog(entries: &[CatalogEntry], config: SimulationConfig) -> Self {
        let mut world = Self::new(config);
        for entry in entries {
            let body = entry.to_body(world.config.astronomical_unit);
            world.add_body(body);
        }
        world
    }

    /// The Sun and the eight planets.
    pub fn solar_system(config: SimulationConfig) -> Self {
        Self::from_catalog(SOLAR_SYSTEM, config)
    }

    /// Add a body and return its index. The configured trail bound is applied.
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies
            .push(body.with_trail_capacity(self.config.trail_length));
        self.refresh_anchor_distances();
        self.bodies.len() - 1
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Find a body by name.
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// The first body flagged as anchor, if any.
    pub fn anchor(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_anchor)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seconds simulated per step.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Total simulated seconds since the world was created.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn elapsed_days(&self) -> f64 {
        self.elapsed / SECONDS_PER_DAY
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Simulated days per real second when stepping once per frame.
    pub fn days_per_real_second(&self) -> f64 {
        self.time_step * self.config.frames_per_second / SECONDS_PER_DAY
    }

    /// Total linear momentum (kg·m/s).
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Advance every body by one time step.
    pub fn step(&mut self) {
        step_bodies(
            &mut self.bodies,
            self.time_step,
            self.config.gravitational_constant,
            self.config.integration_order,
        );
        self.elapsed += self.time_step;
        self.steps += 1;
        self.refresh_anchor_distances();
    }

    /// Multiply the time step by `factor`, clamping at the configured floor.
    ///
    /// Returns the new time step.
    ///
    /// # Errors
    /// [`PhysicsError::InvalidSpeedFactor`] when `factor` or the resulting
    /// step is not finite; the time step is left unchanged.
    pub fn set_speed_multiplier(&mut self, factor: f64) -> Result<f64, PhysicsError> {
        if !factor.is_finite() {
            return Err(PhysicsError::InvalidSpeedFactor(factor));
        }
        let requested = self.time_step * factor;
        if !requested.is_finite() {
            return Err(PhysicsError::InvalidSpeedFactor(factor));
        }

        self.time_step = match validate_time_step(requested, self.config.min_time_step) {
            Ok(step) => step,
            Err(err) => {
                warn!("{err}, clamping");
                self.config.min_time_step
            }
        };
        Ok(self.time_step)
    }

    /// Recompute every non-anchor body's distance to the anchor.
    fn refresh_anchor_distances(&mut self) {
        let Some(anchor_pos) = self.anchor().map(|b| b.position) else {
            return;
        };
        for body in &mut self.bodies {
            body.last_distance_to_primary = if body.is_anchor {
                0.0
            } else {
                (body.position - anchor_pos).length()
            };
        }
    }
}

impl Default for SimulationWorld {
    fn default() -> Self {
        Self::solar_system(SimulationConfig::default())
    }
}

/// Accept a strictly positive time step at or above `floor`.
fn validate_time_step(requested: f64, floor: f64) -> Result<f64, PhysicsError> {
    if requested > 0.0 && requested >= floor {
        Ok(requested)
    } else {
        Err(PhysicsError::InvalidTimeStep { requested, floor })
    }
}
