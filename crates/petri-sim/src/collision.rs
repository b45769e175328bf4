//! Collision resolution.
//!
//! Two phases per frame, walls first and then body pairs:
//!
//! - **Walls**: each axis is clamped independently to the arena interior and
//!   the offending velocity component is reflected with a damping factor, so
//!   bodies lose a little energy on every bounce.
//! - **Pairs**: overlapping bodies are pushed apart by half the penetration
//!   each, then exchange the velocity components along the contact normal
//!   with the 1D elastic collision formula. Tangential components are left
//!   untouched (frictionless contact).

use glam::Vec2;

use crate::body::Body;
use crate::world::Arena;

/// Velocity retention factor applied when a body bounces off a wall.
pub const WALL_DAMPING: f32 = 0.95;

/// Clamps bodies into the arena and reflects their velocity off the walls.
pub fn resolve_walls(bodies: &mut [Body], arena: &Arena) {
    for body in bodies.iter_mut() {
        let lo = body.radius + arena.wall;
        let hi = arena.size - Vec2::splat(body.radius + arena.wall);

        if body.position.x < lo {
            body.position.x = lo;
            body.velocity.x *= -WALL_DAMPING;
        } else if body.position.x > hi.x {
            body.position.x = hi.x;
            body.velocity.x *= -WALL_DAMPING;
        }

        if body.position.y < lo {
            body.position.y = lo;
            body.velocity.y *= -WALL_DAMPING;
        } else if body.position.y > hi.y {
            body.position.y = hi.y;
            body.velocity.y *= -WALL_DAMPING;
        }
    }
}

/// Separates every overlapping pair and exchanges normal velocities
/// elastically.
pub fn resolve_overlaps(bodies: &mut [Body]) {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (left, right) = bodies.split_at_mut(j);
            let (a, b) = (&mut left[i], &mut right[0]);

            let d = b.position - a.position;
            let dist_sq = d.length_squared();
            let radius_sum = a.radius + b.radius;
            if dist_sq >= radius_sum * radius_sum {
                continue;
            }

            let distance = dist_sq.sqrt();

            // Normal points from a toward b; coincident centers have no
            // defined direction, so fall back to an arbitrary axis and skip
            // the positional push.
            let normal = if distance > 0.0 { d / distance } else { Vec2::X };
            if distance > 0.0 {
                let push = normal * ((radius_sum - distance) * 0.5);
                a.position -= push;
                b.position += push;
            }

            let tangent = normal.perp();

            let v1n = normal.dot(a.velocity);
            let v1t = tangent.dot(a.velocity);
            let v2n = normal.dot(b.velocity);
            let v2t = tangent.dot(b.velocity);

            // 1D elastic collision along the normal
            let (m1, m2) = (a.mass, b.mass);
            let v1n_post = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / (m1 + m2);
            let v2n_post = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / (m1 + m2);

            a.velocity = normal * v1n_post + tangent * v1t;
            b.velocity = normal * v2n_post + tangent * v2t;
        }
    }
}
