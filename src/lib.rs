//! Ant Colony Optimization for fixed-endpoint open-path tours.
//!
//! Finds a short path that starts at a chosen city, visits every other
//! city exactly once, and ends at a chosen city. The bundled dataset is
//! the 58 Algerian wilayas, but any validated distance matrix works.
//!
//! - **Distance**: [`distance::City`] points and a validated
//!   [`distance::DistanceMatrix`] (planar Euclidean over lat/lon).
//! - **Wilayas**: the 58 wilaya capitals and their distance matrix.
//! - **ACO**: [`aco::AcoEngine`], a stateful step function that runs one
//!   generation of ants per call and reinforces pheromone trails.
//! - **Session**: [`session::AcoSession`], an explicit driver holding the
//!   endpoints, iteration budget, and cancellation.
//!
//! # Example
//!
//! ```
//! use wilaya_aco::aco::{AcoConfig, AcoEngine};
//! use wilaya_aco::wilayas;
//!
//! let matrix = wilayas::distance_matrix().unwrap();
//! let config = AcoConfig::default().with_ant_count(10).with_seed(7);
//! let mut engine = AcoEngine::new(matrix, config).unwrap();
//!
//! let start = wilayas::index_of("Adrar").unwrap();
//! let end = wilayas::index_of("Alger").unwrap();
//! for _ in 0..3 {
//!     engine.run_generation(start, end).unwrap();
//! }
//! assert_eq!(engine.best_tour().unwrap().len(), wilayas::WILAYA_COUNT);
//! ```
//!
//! # Features
//!
//! - `parallel`: construct ant tours with rayon (see [`aco::AcoConfig::parallel`])
//! - `serde`: `Serialize`/`Deserialize` for [`aco::AcoConfig`] and [`distance::City`]

pub mod aco;
pub mod distance;
pub mod error;
pub mod session;
pub mod wilayas;

pub use error::{AcoError, AcoResult};
