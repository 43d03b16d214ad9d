//! The colony's step function.
//!
//! # Algorithm
//!
//! One call to [`AcoEngine::run_generation`]:
//!
//! 1. Draw one seed per ant from the engine's master RNG
//! 2. Each ant builds a tour from `start` to `end` (optionally in parallel)
//! 3. Update the best tour with any strictly shorter tour, in ant order
//! 4. Evaporate all trails by `1 - rho`, then deposit `Q / length` along
//!    both directions of every edge of every tour
//! 5. Append the best distance to the history
//!
//! The engine has no stopping condition of its own; the caller decides
//! how many generations to run.
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System: Optimization
//! by a Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use super::ant::Ant;
use super::config::AcoConfig;
use super::types::{GenerationReport, PheromoneMatrix};
use crate::distance::DistanceMatrix;
use crate::error::{AcoError, AcoResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

/// Ant colony optimizer for fixed-endpoint open-path tours.
///
/// Owns the pheromone matrix and the best-solution state. Each call to
/// [`run_generation`](Self::run_generation) runs exactly one generation.
///
/// # Examples
///
/// ```
/// use wilaya_aco::aco::{AcoConfig, AcoEngine};
/// use wilaya_aco::distance::{City, DistanceMatrix};
///
/// let cities = vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 1.0, 0.0),
///     City::new("c", 1.0, 1.0),
///     City::new("d", 0.0, 1.0),
/// ];
/// let matrix = DistanceMatrix::from_cities(&cities).unwrap();
/// let mut engine = AcoEngine::new(matrix, AcoConfig::default().with_seed(42)).unwrap();
///
/// let report = engine.run_generation(0, 2).unwrap();
/// assert_eq!(report.best_tour.first(), Some(&0));
/// assert_eq!(report.best_tour.last(), Some(&2));
/// assert_eq!(engine.history().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AcoEngine {
    distances: DistanceMatrix,
    config: AcoConfig,
    pheromones: PheromoneMatrix,
    rng: StdRng,
    best_tour: Option<Vec<usize>>,
    best_distance: f64,
    history: Vec<f64>,
    generation: usize,
}

impl AcoEngine {
    /// Creates an engine seeded from `config.seed`.
    ///
    /// Fails with [`AcoError::InvalidInput`] on an invalid config, and
    /// with [`AcoError::DegenerateDistance`] if two distinct cities are
    /// at zero distance and no distance floor is set.
    pub fn new(distances: DistanceMatrix, config: AcoConfig) -> AcoResult<Self> {
        let rng = seeded_rng(config.seed);
        Self::with_rng(distances, config, rng)
    }

    /// Creates an engine that draws from the given RNG instead of
    /// `config.seed`.
    pub fn with_rng(distances: DistanceMatrix, config: AcoConfig, rng: StdRng) -> AcoResult<Self> {
        config.validate()?;
        if config.distance_floor.is_none() {
            if let Some((from, to)) = distances.zero_off_diagonal() {
                return Err(AcoError::DegenerateDistance { from, to });
            }
        }

        let n = distances.size();
        Ok(Self {
            distances,
            config,
            pheromones: PheromoneMatrix::ones(n),
            rng,
            best_tour: None,
            best_distance: f64::INFINITY,
            history: Vec::new(),
            generation: 0,
        })
    }

    /// Runs one generation and returns the best tour so far.
    ///
    /// Fails with [`AcoError::InvalidInput`] if either index is out of
    /// range or `start == end`; the engine is left untouched.
    pub fn run_generation(&mut self, start: usize, end: usize) -> AcoResult<GenerationReport> {
        check_endpoints(self.distances.size(), start, end)?;

        let seeds: Vec<u64> = (0..self.config.ant_count)
            .map(|_| self.rng.random())
            .collect();
        let tours = self.construct_tours(&seeds, start, end);

        let mut improved = false;
        for (tour, length) in &tours {
            if *length < self.best_distance {
                self.best_distance = *length;
                self.best_tour = Some(tour.clone());
                improved = true;
            }
        }

        self.update_pheromones(&tours);
        self.history.push(self.best_distance);
        self.generation += 1;

        let mean_distance =
            tours.iter().map(|(_, length)| length).sum::<f64>() / tours.len() as f64;

        debug!(
            generation = self.generation,
            best = self.best_distance,
            mean = mean_distance,
            improved,
            "generation complete"
        );
        if improved {
            info!(
                generation = self.generation,
                best = self.best_distance,
                "new best tour"
            );
        }

        Ok(GenerationReport {
            best_tour: self.best_tour.clone().unwrap_or_default(),
            best_distance: self.best_distance,
            mean_distance,
            generation: self.generation,
            improved,
        })
    }

    /// Sum of distances between consecutive cities; 0 for fewer than two.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        tour.windows(2)
            .map(|w| self.distances.get(w[0], w[1]))
            .sum()
    }

    /// Picks the next city for one ant step under the current trails.
    ///
    /// `visited` is indexed by city. Returns `end` once every other city
    /// is visited.
    ///
    /// Fails with [`AcoError::InvalidInput`] if `visited` does not have
    /// one entry per city, or if `current` or `end` is out of range.
    pub fn select_next_city<R: Rng>(
        &self,
        current: usize,
        visited: &[bool],
        end: usize,
        rng: &mut R,
    ) -> AcoResult<usize> {
        let n = self.num_cities();
        if visited.len() != n {
            return Err(AcoError::invalid(format!(
                "visited mask has {} entries, expected {n}",
                visited.len()
            )));
        }
        if current >= n {
            return Err(AcoError::invalid(format!(
                "current index {current} out of range for {n} cities"
            )));
        }
        if end >= n {
            return Err(AcoError::invalid(format!(
                "end index {end} out of range for {n} cities"
            )));
        }
        Ok(self.ant().select_next_city(current, visited, end, rng))
    }

    /// Builds one ant's tour under the current trails without touching
    /// engine state.
    pub fn construct_tour<R: Rng>(
        &self,
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> AcoResult<Vec<usize>> {
        check_endpoints(self.num_cities(), start, end)?;
        Ok(self.ant().construct_tour(start, end, rng))
    }

    /// Clears pheromones, best tour, and history.
    ///
    /// With a configured seed the RNG restarts from it, so a reset
    /// engine replays the same run.
    pub fn reset(&mut self) {
        self.pheromones = PheromoneMatrix::ones(self.distances.size());
        self.best_tour = None;
        self.best_distance = f64::INFINITY;
        self.history.clear();
        self.generation = 0;
        if let Some(seed) = self.config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    /// Best tour found so far, `None` before the first generation.
    pub fn best_tour(&self) -> Option<&[usize]> {
        self.best_tour.as_deref()
    }

    /// Length of the best tour, `None` before the first generation.
    pub fn best_distance(&self) -> Option<f64> {
        self.best_distance.is_finite().then_some(self.best_distance)
    }

    /// Best distance after each generation.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Number of generations run.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Read-only view of the pheromone trails.
    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    /// The distance matrix being optimized over.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// The engine's configuration.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.distances.size()
    }

    fn ant(&self) -> Ant<'_> {
        Ant {
            distances: &self.distances,
            pheromones: &self.pheromones,
            alpha: self.config.alpha,
            beta: self.config.beta,
            distance_floor: self.config.distance_floor,
        }
    }

    /// Builds one tour per seed. Output order follows `seeds`.
    fn construct_tours(&self, seeds: &[u64], start: usize, end: usize) -> Vec<(Vec<usize>, f64)> {
        let ant = self.ant();
        let build = |&seed: &u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let tour = ant.construct_tour(start, end, &mut rng);
            let length = self.tour_length(&tour);
            (tour, length)
        };

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return seeds.par_iter().map(build).collect();
        }

        seeds.iter().map(build).collect()
    }

    fn update_pheromones(&mut self, tours: &[(Vec<usize>, f64)]) {
        self.pheromones.evaporate(self.config.evaporation_rate);
        for (tour, length) in tours {
            let length = match self.config.distance_floor {
                Some(eps) => length.max(eps),
                None => *length,
            };
            self.pheromones
                .deposit_tour(tour, self.config.deposit / length);
        }
    }
}

/// Checks that `start` and `end` are distinct indices below `n`.
pub(crate) fn check_endpoints(n: usize, start: usize, end: usize) -> AcoResult<()> {
    if start >= n {
        return Err(AcoError::invalid(format!(
            "start index {start} out of range for {n} cities"
        )));
    }
    if end >= n {
        return Err(AcoError::invalid(format!(
            "end index {end} out of range for {n} cities"
        )));
    }
    if start == end {
        return Err(AcoError::invalid(format!(
            "start and end must differ, both are {start}"
        )));
    }
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::City;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new("a", 0.0, 0.0),
            City::new("b", 1.0, 0.0),
            City::new("c", 1.0, 1.0),
            City::new("d", 0.0, 1.0),
        ])
        .unwrap()
    }

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 3.0, 4.0],
            vec![3.0, 0.0, 5.0],
            vec![4.0, 5.0, 0.0],
        ])
        .unwrap()
    }

    fn ring(n: usize) -> DistanceMatrix {
        let cities: Vec<City> = (0..n)
            .map(|i| {
                let t = i as f64 / n as f64 * std::f64::consts::TAU;
                City::new(format!("r{i}"), t.cos() * 10.0, t.sin() * 10.0)
            })
            .collect();
        DistanceMatrix::from_cities(&cities).unwrap()
    }

    fn square_config() -> AcoConfig {
        AcoConfig::default()
            .with_ant_count(30)
            .with_alpha(1.0)
            .with_beta(5.0)
            .with_evaporation_rate(0.5)
            .with_deposit(100.0)
            .with_seed(42)
    }

    #[test]
    fn test_initial_state() {
        let engine = AcoEngine::new(unit_square(), square_config()).unwrap();
        assert!(engine.best_tour().is_none());
        assert!(engine.best_distance().is_none());
        assert!(engine.history().is_empty());
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.num_cities(), 4);
        assert_eq!(engine.pheromones().get(1, 3), 1.0);
    }

    #[test]
    fn test_tour_length() {
        let engine = AcoEngine::new(triangle(), AcoConfig::default()).unwrap();
        assert!((engine.tour_length(&[0, 1, 2]) - 8.0).abs() < 1e-12);
        assert_eq!(engine.tour_length(&[1]), 0.0);
        assert_eq!(engine.tour_length(&[]), 0.0);
    }

    #[test]
    fn test_unit_square_converges() {
        let mut engine = AcoEngine::new(unit_square(), square_config()).unwrap();
        for _ in 0..50 {
            engine.run_generation(0, 2).unwrap();
        }
        let best = engine.best_distance().unwrap();
        assert!(
            (best - (2.0 + 2f64.sqrt())).abs() < 1e-9,
            "expected 2 + sqrt(2), got {best}"
        );
        let tour = engine.best_tour().unwrap();
        assert!(tour == [0, 1, 3, 2] || tour == [0, 3, 1, 2], "got {tour:?}");
        assert_eq!(engine.history().len(), 50);
    }

    #[test]
    fn test_equal_length_tour_does_not_replace_best() {
        // Both open paths from 0 to 2 on the unit square have length 2 + sqrt(2).
        let mut engine = AcoEngine::new(unit_square(), square_config()).unwrap();
        let first = engine.run_generation(0, 2).unwrap();
        assert!(first.improved);

        for _ in 0..20 {
            let report = engine.run_generation(0, 2).unwrap();
            assert_eq!(report.best_distance, first.best_distance);
            assert!(!report.improved);
            assert_eq!(report.best_tour, first.best_tour);
        }
        assert_eq!(engine.best_tour(), Some(first.best_tour.as_slice()));
    }

    #[test]
    fn test_select_next_city_checks_inputs() {
        let engine = AcoEngine::new(unit_square(), square_config()).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let visited = [true, false, false, false];

        let err = engine
            .select_next_city(0, &[true, false, false], 2, &mut rng)
            .unwrap_err();
        assert!(err.is_invalid_input());
        let err = engine.select_next_city(9, &visited, 2, &mut rng).unwrap_err();
        assert!(err.is_invalid_input());
        let err = engine.select_next_city(0, &visited, 4, &mut rng).unwrap_err();
        assert!(err.is_invalid_input());

        let next = engine.select_next_city(0, &visited, 2, &mut rng).unwrap();
        assert!(next == 1 || next == 3, "picked {next}");
        let done = [true, true, false, true];
        assert_eq!(engine.select_next_city(3, &done, 2, &mut rng).unwrap(), 2);
    }

    #[test]
    fn test_single_ant_pheromone_update_is_exact() {
        // With three cities the only tour from 0 to 2 is [0, 1, 2].
        let config = AcoConfig::default()
            .with_ant_count(1)
            .with_evaporation_rate(0.5)
            .with_deposit(8.0)
            .with_seed(1);
        let mut engine = AcoEngine::new(triangle(), config).unwrap();
        let report = engine.run_generation(0, 2).unwrap();

        assert_eq!(report.best_tour, vec![0, 1, 2]);
        assert!((report.best_distance - 8.0).abs() < 1e-12);
        assert!((report.mean_distance - 8.0).abs() < 1e-12);
        assert!(report.improved);
        assert_eq!(report.generation, 1);

        let p = engine.pheromones();
        assert!((p.get(0, 1) - 1.5).abs() < 1e-12);
        assert!((p.get(2, 1) - 1.5).abs() < 1e-12);
        assert!((p.get(0, 2) - 0.5).abs() < 1e-12);
        assert!((p.get(0, 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mean_not_below_best() {
        let mut engine = AcoEngine::new(ring(10), square_config()).unwrap();
        let report = engine.run_generation(0, 5).unwrap();
        assert!(report.mean_distance >= report.best_distance - 1e-12);
    }

    #[test]
    fn test_history_non_increasing() {
        let mut engine = AcoEngine::new(ring(12), square_config().with_ant_count(5)).unwrap();
        let mut previous = f64::INFINITY;
        for k in 1..=30 {
            let report = engine.run_generation(3, 9).unwrap();
            assert!(report.best_distance <= previous);
            assert_eq!(engine.history().len(), k);
            previous = report.best_distance;
        }
        for window in engine.history().windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_pheromones_stay_symmetric_and_non_negative() {
        let mut engine = AcoEngine::new(ring(9), square_config().with_ant_count(7)).unwrap();
        for _ in 0..25 {
            engine.run_generation(0, 4).unwrap();
        }
        assert!(engine.pheromones().is_symmetric());
        assert!(engine.pheromones().min_value() >= 0.0);
    }

    #[test]
    fn test_same_seed_same_history() {
        let run = || {
            let mut engine = AcoEngine::new(ring(15), square_config().with_seed(7)).unwrap();
            for _ in 0..20 {
                engine.run_generation(2, 11).unwrap();
            }
            engine.history().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_invalid_endpoints_leave_state_unchanged() {
        let mut engine = AcoEngine::new(unit_square(), square_config()).unwrap();
        engine.run_generation(0, 2).unwrap();
        let before = engine.clone();

        for (start, end) in [(1, 1), (4, 2), (0, 4), (usize::MAX, 0)] {
            let err = engine.run_generation(start, end).unwrap_err();
            assert!(err.is_invalid_input(), "({start}, {end}) should be invalid");
        }

        assert_eq!(engine.history(), before.history());
        assert_eq!(engine.pheromones(), before.pheromones());
        assert_eq!(engine.best_tour(), before.best_tour());
        assert_eq!(engine.generation(), before.generation());

        // The RNG was not advanced either.
        let mut replay = before;
        assert_eq!(
            engine.run_generation(0, 2).unwrap(),
            replay.run_generation(0, 2).unwrap()
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = AcoEngine::new(unit_square(), AcoConfig::default().with_ant_count(0)).unwrap_err();
        assert!(err.is_invalid_input());
        let err = AcoEngine::new(
            unit_square(),
            AcoConfig::default().with_evaporation_rate(1.0),
        )
        .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_coincident_cities_rejected_without_floor() {
        let matrix = DistanceMatrix::from_cities(&[
            City::new("a", 0.0, 0.0),
            City::new("b", 1.0, 0.0),
            City::new("a2", 0.0, 0.0),
        ])
        .unwrap();
        let err = AcoEngine::new(matrix.clone(), AcoConfig::default()).unwrap_err();
        assert_eq!(err, AcoError::DegenerateDistance { from: 0, to: 2 });

        let mut engine =
            AcoEngine::new(matrix, AcoConfig::default().with_distance_floor(1e-6).with_seed(3))
                .unwrap();
        let report = engine.run_generation(1, 2).unwrap();
        assert!(report.best_distance.is_finite());
        assert!(engine.pheromones().get(0, 2).is_finite());
    }

    #[test]
    fn test_reset_replays_seeded_run() {
        let mut engine = AcoEngine::new(ring(10), square_config()).unwrap();
        for _ in 0..5 {
            engine.run_generation(0, 5).unwrap();
        }
        let first = engine.history().to_vec();

        engine.reset();
        assert!(engine.best_tour().is_none());
        assert!(engine.history().is_empty());
        assert_eq!(engine.pheromones(), &PheromoneMatrix::ones(10));

        for _ in 0..5 {
            engine.run_generation(0, 5).unwrap();
        }
        assert_eq!(engine.history(), first.as_slice());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let run = |parallel: bool| {
            let config = square_config().with_parallel(parallel);
            let mut engine = AcoEngine::new(ring(20), config).unwrap();
            for _ in 0..10 {
                engine.run_generation(0, 10).unwrap();
            }
            (engine.history().to_vec(), engine.best_tour().map(<[usize]>::to_vec))
        };
        assert_eq!(run(false), run(true));
    }
}
