//! Body state and the mass/radius oscillation laws.

use glam::Vec2;

/// Nominal body radius, used as the spawn inset and the exclusion radius
/// when placing new bodies.
pub const BASE_RADIUS: f32 = 15.0;

/// Smallest radius a body can shrink to.
pub const MIN_RADIUS: f32 = 5.0;

/// Largest radius a body can grow to.
pub const MAX_RADIUS: f32 = 15.0;

/// Amplitude of the sinusoidal mass oscillation around a mean of 1.
pub const MASS_AMPLITUDE: f32 = 0.5;

/// Initial velocity components are drawn uniformly from
/// `[-SPAWN_SPEED, SPAWN_SPEED]`.
pub const SPAWN_SPEED: f32 = 2.0;

/// A circular body in the simulation.
///
/// Mass oscillates sinusoidally over time with a per-body phase offset fixed
/// at creation; radius is derived from the current mass every running frame.
#[derive(Debug, Clone)]
pub struct Body {
    /// Position of the center in arena space.
    pub position: Vec2,
    /// Velocity in arena units per time unit.
    pub velocity: Vec2,
    /// Current mass, always in `[1 - MASS_AMPLITUDE, 1 + MASS_AMPLITUDE]`.
    pub mass: f32,
    /// Phase offset into the shared mass oscillation, constant for the
    /// body's lifetime.
    pub phase: f32,
    /// Current radius, derived from `mass`.
    pub radius: f32,
    /// Accumulated force for this frame.
    pub(crate) force: Vec2,
}

impl Body {
    /// Creates a body at the given position with mass evaluated at time zero.
    pub fn new(position: Vec2, velocity: Vec2, phase: f32) -> Self {
        let mass = 1.0 + MASS_AMPLITUDE * phase.sin();
        Self {
            position,
            velocity,
            mass,
            phase,
            radius: radius_for_mass(mass),
            force: Vec2::ZERO,
        }
    }

    /// Refreshes mass and radius from the oscillation law at time `t`.
    pub fn oscillate(&mut self, t: f32) {
        self.mass = 1.0 + MASS_AMPLITUDE * (t + self.phase).sin();
        self.radius = radius_for_mass(self.mass);
    }

    /// Adds to the force accumulated this frame.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Returns the force accumulated so far this frame.
    pub fn force(&self) -> Vec2 {
        self.force
    }

    /// Clears the accumulated force.
    pub(crate) fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }
}

/// Maps mass in `[0.5, 1.5]` onto radius in `[MIN_RADIUS, MAX_RADIUS]`.
pub fn radius_for_mass(mass: f32) -> f32 {
    (((mass - 0.5) * 10.0).round() + 5.0).clamp(MIN_RADIUS, MAX_RADIUS)
}
