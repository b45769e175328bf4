//! Pairwise force accumulation.
//!
//! Every unordered pair of bodies exchanges a gravitational pull and, inside
//! the cutoff distance, a short-range repulsive push. Both terms fold into a
//! single scalar magnitude along the line of centers, applied equal and
//! opposite so total momentum is conserved to floating-point precision.

use crate::body::Body;
use crate::world::SimConfig;

/// Distance guard added to every pair separation. Keeps the force finite
/// when two centers coincide; the collision resolver separates such bodies
/// in the same frame.
pub const EPSILON: f32 = 1e-10;

/// Clears and re-accumulates the per-body force from every unordered pair.
pub fn accumulate(bodies: &mut [Body], config: &SimConfig) {
    for body in bodies.iter_mut() {
        body.clear_force();
    }

    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (left, right) = bodies.split_at_mut(j);
            let (a, b) = (&mut left[i], &mut right[0]);

            let d = b.position - a.position;
            let distance = d.length() + EPSILON;

            let gravity = config.gravity * a.mass * b.mass / (distance * distance);
            let repulsion = if distance < config.repulsion_cutoff {
                config.repulsion / distance
            } else {
                0.0
            };

            // Positive magnitude pulls the pair together, negative pushes apart
            let force = (gravity - repulsion) * (d / distance);
            a.force += force;
            b.force -= force;
        }
    }
}
