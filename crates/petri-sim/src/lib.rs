//! Deterministic 2D particle simulation core.
//!
//! A fixed population of circular bodies exerts pairwise gravitational and
//! short-range repulsive forces, integrates motion under a live-tunable
//! timestep, and resolves overlaps (body-body and body-wall) every frame:
//!
//! - [`Body`] - circular body with oscillating mass and derived radius
//! - [`World`] - owns the population; spawn, resize, reset, and step
//! - [`SimConfig`] - per-frame tuning passed into every [`World::step`]
//! - [`Arena`] - bounded simulation area with solid walls
//! - [`k_nearest`] - neighbor query for drawing connective edges
//!
//! The crate is a pure state-update core: no rendering, input handling, or
//! frame pacing. A host calls [`World::step`] once per frame and reads body
//! state back for drawing.
//!
//! # Example
//!
//! ```
//! use petri_sim::{Arena, SimConfig, World};
//!
//! let mut world = World::new(Arena::default()).with_seed(7);
//! world.resize(30);
//!
//! let config = SimConfig::default();
//! world.step(&config);
//!
//! // Body state for the draw loop
//! for (position, radius) in world.circles() {
//!     assert!(radius >= 5.0 && radius <= 15.0);
//!     assert!(position.x > 0.0 && position.y > 0.0);
//! }
//!
//! // Connective edges for the renderer
//! let edges = world.neighbors(0, 4);
//! assert_eq!(edges.len(), 4);
//! ```

pub mod body;
pub mod collision;
pub mod forces;
pub mod neighbor;
pub mod rng;
pub mod world;

pub use body::{
    BASE_RADIUS, Body, MASS_AMPLITUDE, MAX_RADIUS, MIN_RADIUS, SPAWN_SPEED, radius_for_mass,
};
pub use collision::{WALL_DAMPING, resolve_overlaps, resolve_walls};
pub use forces::EPSILON;
pub use neighbor::k_nearest;
pub use rng::SimRng;
pub use world::{Arena, SimConfig, World};
