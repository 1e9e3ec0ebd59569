//! Pairwise Newtonian gravity between bodies.

use bevy::math::DVec2;

use super::PhysicsError;
use crate::body::Body;
use crate::types::MIN_SEPARATION;

/// Compute the gravitational force exerted on `a` by `b`.
///
/// The force points from `a` toward `b` with magnitude `G·m_a·m_b / r²`.
/// Equivalent to the `atan2` decomposition `(cos θ·F, sin θ·F)`, but built
/// from the unit separation vector so swapping the arguments flips the sign
/// exactly.
///
/// # Errors
/// [`PhysicsError::DegenerateDistance`] when the bodies are closer than
/// [`MIN_SEPARATION`] (or their separation is not finite). Callers treat the
/// pair as exerting no force.
#[inline]
pub fn attraction(a: &Body, b: &Body, g: f64) -> Result<DVec2, PhysicsError> {
    let delta = b.position - a.position;
    let r_squared = delta.length_squared();

    // Negated comparison so NaN separations are rejected too.
    if !(r_squared > MIN_SEPARATION * MIN_SEPARATION) {
        return Err(PhysicsError::DegenerateDistance {
            a: a.name.clone(),
            b: b.name.clone(),
        });
    }

    let r = r_squared.sqrt();
    let force = g * a.mass * b.mass / r_squared;
    Ok(delta * (force / r))
}
