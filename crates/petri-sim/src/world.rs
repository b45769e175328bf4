//! Simulation world.
//!
//! Contains the [`World`] container that owns the body population and drives
//! one frame of simulation per [`World::step`] call: mass/radius refresh,
//! pair force accumulation, integration, and collision resolution. The host
//! passes a [`SimConfig`] into every step, so all tuning is live.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::body::{BASE_RADIUS, Body, SPAWN_SPEED};
use crate::rng::SimRng;
use crate::{collision, forces, neighbor};

/// Candidate positions tried per body before giving up on a clear spot.
const PLACEMENT_ATTEMPTS: usize = 1000;

/// Minimum center distance between a newly placed body and every existing
/// one.
const SPAWN_SPACING: f32 = 2.0 * BASE_RADIUS + 1.0;

/// Per-frame simulation parameters.
///
/// Passed by reference into [`World::step`] every frame; the host may change
/// any field between frames without restarting the simulation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimConfig {
    /// Integration step per frame. Useful range roughly 0.1-5.
    pub timestep: f32,
    /// Gravitational constant scaling the pairwise attraction. 0-5.
    pub gravity: f32,
    /// Strength of the short-range repulsive force. 0-5.
    pub repulsion: f32,
    /// Center distance below which the repulsion term activates. 0-40.
    pub repulsion_cutoff: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0,
            gravity: 4.0,
            repulsion: 2.0,
            repulsion_cutoff: 20.0,
        }
    }
}

/// Rectangular simulation area anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arena {
    /// Width and height of the area.
    pub size: Vec2,
    /// Thickness of the solid border bodies bounce off.
    pub wall: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            size: Vec2::new(900.0, 600.0),
            wall: 5.0,
        }
    }
}

impl Arena {
    /// Creates an arena of the given size with the default wall thickness.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ..Default::default()
        }
    }
}

/// The simulation world.
///
/// Owns the body population exclusively; hosts read state back through the
/// slice accessors after stepping.
#[derive(Debug, Clone)]
pub struct World {
    /// All bodies, in insertion order.
    bodies: Vec<Body>,
    /// Simulation area.
    arena: Arena,
    /// Placement RNG.
    rng: SimRng,
    /// Accumulated simulation time, drives the mass oscillation.
    clock: f32,
    /// When false, `step` leaves all body state untouched.
    running: bool,
}

impl Default for World {
    fn default() -> Self {
        Self::new(Arena::default())
    }
}

impl World {
    /// Creates an empty world over the given arena.
    pub fn new(arena: Arena) -> Self {
        Self {
            bodies: Vec::new(),
            arena,
            rng: SimRng::default(),
            clock: 0.0,
            running: true,
        }
    }

    /// Sets the placement seed. Worlds built with equal seeds and stepped
    /// with equal configs evolve identically.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SimRng::new(seed);
        self
    }

    /// Returns the arena.
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Returns all bodies in insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Returns a body by index.
    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Returns the current population size.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns true if the world holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Returns the accumulated simulation time.
    pub fn time(&self) -> f32 {
        self.clock
    }

    /// Returns whether physics stepping is active.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Pauses or resumes physics stepping. Resize and reset work either way.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flips between paused and running.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Returns `(position, radius)` for every body, shaped for a draw loop.
    pub fn circles(&self) -> Vec<(Vec2, f32)> {
        self.bodies.iter().map(|b| (b.position, b.radius)).collect()
    }

    /// Finds the `k` bodies nearest to `bodies()[index]`, excluding itself.
    pub fn neighbors(&self, index: usize, k: usize) -> Vec<(usize, f32)> {
        neighbor::k_nearest(&self.bodies, index, k)
    }

    /// Grows or shrinks the population to `target`.
    ///
    /// Growing spawns the missing bodies with the usual clearance rule;
    /// shrinking truncates, keeping the first `target` bodies untouched.
    pub fn resize(&mut self, target: usize) {
        if target > self.bodies.len() {
            let missing = target - self.bodies.len();
            self.spawn_batch(missing);
        } else {
            self.bodies.truncate(target);
        }
    }

    /// Spawns `count` bodies at rejection-sampled clear positions.
    ///
    /// Positions are drawn uniformly from the arena inset by [`BASE_RADIUS`]
    /// and accepted when farther than `2 * BASE_RADIUS + 1` from every
    /// existing body. Velocities are uniform in `[-SPAWN_SPEED, SPAWN_SPEED]`
    /// per axis, phases uniform in `[0, 2π)`.
    pub fn spawn_batch(&mut self, count: usize) {
        for _ in 0..count {
            let position = place_clear(&mut self.rng, &self.arena, &self.bodies);
            let velocity = sample_velocity(&mut self.rng);
            let phase = self.rng.range(0.0, std::f32::consts::TAU);
            self.bodies.push(Body::new(position, velocity, phase));
        }
    }

    /// Re-randomizes position and velocity of every body in place.
    ///
    /// Mass, phase, and radius are untouched. Bodies are re-placed under the
    /// same clearance rule as spawning, each checked against those already
    /// re-placed.
    pub fn reset(&mut self) {
        for i in 0..self.bodies.len() {
            let position = place_clear(&mut self.rng, &self.arena, &self.bodies[..i]);
            let velocity = sample_velocity(&mut self.rng);

            let body = &mut self.bodies[i];
            body.position = position;
            body.velocity = velocity;
        }
    }

    /// Advances the simulation by one frame.
    ///
    /// Safe to call every host frame; when paused this leaves all body state
    /// untouched.
    pub fn step(&mut self, config: &SimConfig) {
        if !self.running {
            return;
        }

        self.clock += config.timestep;

        // Refresh oscillating mass and radius
        for body in &mut self.bodies {
            body.oscillate(self.clock);
        }

        // Accumulate pair forces
        forces::accumulate(&mut self.bodies, config);

        // Integrate velocities, then positions
        let dt = config.timestep;
        for body in &mut self.bodies {
            body.velocity += body.force / body.mass * dt;
            body.position += body.velocity * dt;
        }

        // Resolve collisions, walls first
        collision::resolve_walls(&mut self.bodies, &self.arena);
        collision::resolve_overlaps(&mut self.bodies);
    }
}

/// Draws a candidate position uniformly from the arena inset by the nominal
/// radius.
fn sample_position(rng: &mut SimRng, arena: &Arena) -> Vec2 {
    Vec2::new(
        rng.range(BASE_RADIUS, arena.size.x - BASE_RADIUS),
        rng.range(BASE_RADIUS, arena.size.y - BASE_RADIUS),
    )
}

/// Draws a spawn velocity, uniform per axis.
fn sample_velocity(rng: &mut SimRng) -> Vec2 {
    Vec2::new(
        rng.range(-SPAWN_SPEED, SPAWN_SPEED),
        rng.range(-SPAWN_SPEED, SPAWN_SPEED),
    )
}

/// Returns true if `position` keeps the spawn spacing to every body.
fn is_clear(existing: &[Body], position: Vec2) -> bool {
    existing
        .iter()
        .all(|b| b.position.distance(position) > SPAWN_SPACING)
}

/// Rejection-samples a position clear of `existing`.
///
/// Gives up after [`PLACEMENT_ATTEMPTS`] and returns the last candidate with
/// residual overlap rather than spinning; the collision resolver separates
/// such bodies over the following frames.
fn place_clear(rng: &mut SimRng, arena: &Arena, existing: &[Body]) -> Vec2 {
    let mut position = sample_position(rng, arena);
    for _ in 1..PLACEMENT_ATTEMPTS {
        if is_clear(existing, position) {
            break;
        }
        position = sample_position(rng, arena);
    }
    position
}
