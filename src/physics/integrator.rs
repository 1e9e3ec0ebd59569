//! Explicit Euler stepping for the whole body set.
//!
//! Two update orders are supported:
//! - [`IntegrationOrder::Snapshot`] computes every body's net force from the
//!   positions at the start of the step, then integrates all bodies. The
//!   result does not depend on the order of the body list.
//! - [`IntegrationOrder::Sequential`] integrates bodies one at a time, so body
//!   `i` sees the already-advanced positions of bodies `0..i`. This reproduces
//!   the classic in-place loop bit for bit.

use bevy::math::DVec2;
use bevy::prelude::*;

use super::gravity::attraction;
use crate::body::Body;

/// How forces and integrations are interleaved within one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegrationOrder {
    /// All forces first, then all integrations.
    #[default]
    Snapshot,
    /// Force and integrate each body in list order.
    Sequential,
}

/// Sum of the gravitational forces acting on `bodies[index]` from every other body.
///
/// Degenerate pairs (coincident bodies) contribute nothing.
pub fn net_force(bodies: &[Body], index: usize, g: f64) -> DVec2 {
    let body = &bodies[index];
    let mut total = DVec2::ZERO;

    for (j, other) in bodies.iter().enumerate() {
        if j == index {
            continue;
        }
        match attraction(body, other, g) {
            Ok(force) => total += force,
            Err(err) => debug!("Skipping gravity pair: {err}"),
        }
    }

    total
}

/// Accumulate the net force on `bodies[index]` and advance it by `dt`.
pub fn update_position(bodies: &mut [Body], index: usize, dt: f64, g: f64) {
    let force = net_force(bodies, index, g);
    bodies[index].integrate(force, dt);
}

/// Advance every body by one step of `dt` seconds.
pub fn step_bodies(bodies: &mut [Body], dt: f64, g: f64, order: IntegrationOrder) {
    match order {
        IntegrationOrder::Snapshot => {
            let forces: Vec<DVec2> = (0..bodies.len())
                .map(|i| net_force(bodies, i, g))
                .collect();
            for (body, force) in bodies.iter_mut().zip(forces) {
                body.integrate(force, dt);
            }
        }
        IntegrationOrder::Sequential => {
            for i in 0..bodies.len() {
                update_position(bodies, i, dt, g);
            }
        }
    }
}
