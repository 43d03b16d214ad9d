//! Points and the distance matrix the engine optimizes over.
//!
//! Distances are planar Euclidean over latitude/longitude degrees, not
//! great-circle distances. That is enough to rank tours over a fixed
//! point set, which is all the colony needs.

mod city;
mod matrix;

pub use city::City;
pub use matrix::DistanceMatrix;
