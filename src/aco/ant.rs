//! Single-ant tour construction.
//!
//! An ant starts at the start city and repeatedly picks the next city by
//! roulette-wheel selection over
//! `pheromone[current][c]^alpha * (1 / distance[current][c])^beta`.
//! The end city is held back until every other city has been visited,
//! then appended as the final step.

use super::types::PheromoneMatrix;
use crate::distance::DistanceMatrix;
use rand::Rng;
use tracing::warn;

/// Read-only view of everything an ant needs to build a tour.
///
/// Borrowed from the engine for the duration of one generation, so many
/// ants can share it (and, with the `parallel` feature, across threads).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ant<'a> {
    pub distances: &'a DistanceMatrix,
    pub pheromones: &'a PheromoneMatrix,
    pub alpha: f64,
    pub beta: f64,
    pub distance_floor: Option<f64>,
}

impl Ant<'_> {
    /// Attractiveness of moving from `from` to `to`.
    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        let mut d = self.distances.get(from, to);
        if let Some(eps) = self.distance_floor {
            d = d.max(eps);
        }
        let tau = self.pheromones.get(from, to).powf(self.alpha);
        let eta = (1.0 / d).powf(self.beta);
        tau * eta
    }

    /// Picks the next city from `current`.
    ///
    /// Candidates are the unvisited cities other than `end`. With no
    /// candidates left, returns `end`.
    pub fn select_next_city<R: Rng>(
        &self,
        current: usize,
        visited: &[bool],
        end: usize,
        rng: &mut R,
    ) -> usize {
        let candidates: Vec<(usize, f64)> = (0..self.distances.size())
            .filter(|&c| !visited[c] && c != end)
            .map(|c| (c, self.weight(current, c)))
            .collect();

        match candidates.len() {
            0 => return end,
            1 => return candidates[0].0,
            _ => {}
        }

        let total: f64 = candidates.iter().map(|&(_, w)| w).sum();
        if !(total > 0.0 && total.is_finite()) {
            warn!(
                current,
                total, "selection weights degenerate, sampling uniformly"
            );
            return candidates[rng.random_range(0..candidates.len())].0;
        }

        let threshold = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        for &(city, w) in &candidates {
            cumulative += w;
            if cumulative > threshold {
                return city;
            }
        }

        candidates[candidates.len() - 1].0 // floating-point fallback
    }

    /// Builds a full tour from `start` to `end` visiting every city once.
    ///
    /// `start` and `end` must be distinct valid indices.
    pub fn construct_tour<R: Rng>(&self, start: usize, end: usize, rng: &mut R) -> Vec<usize> {
        let n = self.distances.size();
        let mut tour = Vec::with_capacity(n);
        let mut visited = vec![false; n];

        tour.push(start);
        visited[start] = true;
        let mut current = start;

        while tour.len() < n - 1 {
            let next = self.select_next_city(current, &visited, end, rng);
            tour.push(next);
            visited[next] = true;
            current = next;
        }

        tour.push(end);
        tour
    }
}
