//! Ant Colony Optimization (ACO).
//!
//! A constructive, population-based metaheuristic. Each generation a
//! colony of ants builds tours city by city, choosing the next city with
//! probability proportional to `trail^alpha * (1/distance)^beta`. Trails
//! then evaporate and are reinforced along every tour in proportion to
//! its quality, steering later generations toward shorter tours.
//!
//! Tours here are open paths with fixed endpoints: they start at a
//! chosen city, visit every other city exactly once, and finish at a
//! chosen end city.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Colony parameters (ants, alpha, beta, rho, Q, seed)
//! - [`AcoEngine`]: Owns the trails and best tour; runs one generation per call
//! - [`GenerationReport`]: Best tour, best distance, and mean distance after a step
//! - [`PheromoneMatrix`]: Read-only view of the trail strengths
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod config;
mod engine;
mod types;

pub use config::AcoConfig;
pub use engine::AcoEngine;
pub(crate) use engine::check_endpoints;
pub use types::{GenerationReport, PheromoneMatrix};
