//! Gravitating bodies and their orbit trails.

use std::collections::VecDeque;

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::types::TRAIL_LENGTH;

/// A point mass taking part in the simulation.
///
/// Uses f64 (DVec2) for physics accuracy over solar system scales.
#[derive(Clone, Debug)]
pub struct Body {
    /// Display name.
    pub name: String,
    /// Position in meters.
    pub position: DVec2,
    /// Velocity in meters per second.
    pub velocity: DVec2,
    /// Mass in kilograms.
    pub mass: f64,
    /// Display radius in pixels at the initial zoom level. Not used by physics.
    pub radius: f32,
    /// Fill color.
    pub color: Color,
    /// Anchor bodies (the Sun) get no distance label but are otherwise ordinary.
    pub is_anchor: bool,
    /// Most recent positions, oldest first.
    trail: VecDeque<DVec2>,
    trail_capacity: usize,
    /// Distance to the anchor body as of the last step (meters).
    pub last_distance_to_primary: f64,
}

impl Body {
    /// Create a body at rest.
    pub fn new(
        name: impl Into<String>,
        position: DVec2,
        mass: f64,
        radius: f32,
        color: Color,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            velocity: DVec2::ZERO,
            mass,
            radius,
            color,
            is_anchor: false,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
            trail_capacity: TRAIL_LENGTH,
            last_distance_to_primary: 0.0,
        }
    }

    /// Set the initial velocity.
    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Mark this body as the anchor.
    pub fn anchored(mut self) -> Self {
        self.is_anchor = true;
        self
    }

    /// Override the trail bound. A capacity of zero keeps no history.
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail_capacity = capacity;
        while self.trail.len() > capacity {
            self.trail.pop_front();
        }
        self
    }

    /// Recent positions, oldest first.
    pub fn trail(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.trail.iter().copied()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Most positions the trail will hold.
    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }

    /// Euclidean distance to another body in meters.
    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).length()
    }

    /// Momentum in kg·m/s.
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Advance this body by one explicit Euler step under `total_force`.
    ///
    /// Velocity is updated first and the new velocity moves the position.
    /// The new position is appended to the trail, evicting the oldest entry
    /// once the trail is full.
    pub fn integrate(&mut self, total_force: DVec2, dt: f64) {
        self.velocity += total_force / self.mass * dt;
        self.position += self.velocity * dt;

        if self.trail_capacity == 0 {
            return;
        }
        self.trail.push_back(self.position);
        if self.trail.len() > self.trail_capacity {
            self.trail.pop_front();
        }
    }
}
