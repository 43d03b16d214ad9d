//! Pheromone trails and per-generation output.

/// Symmetric n×n pheromone trail matrix.
///
/// Starts at all ones. Every deposit writes both `(a, b)` and `(b, a)`,
/// so the matrix stays symmetric. Evaporation multiplies by a factor in
/// `(0, 1)` and deposits are non-negative, so entries never go negative.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates an n×n matrix filled with ones.
    pub fn ones(size: usize) -> Self {
        Self {
            data: vec![1.0; size * size],
            size,
        }
    }

    /// Trail strength on edge `(from, to)`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Smallest entry.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Multiplies every entry by `1 - rate`.
    pub(crate) fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for p in &mut self.data {
            *p *= keep;
        }
    }

    /// Adds `amount` to both directions of every consecutive edge.
    pub(crate) fn deposit_tour(&mut self, tour: &[usize], amount: f64) {
        for edge in tour.windows(2) {
            let (a, b) = (edge[0], edge[1]);
            self.data[a * self.size + b] += amount;
            self.data[b * self.size + a] += amount;
        }
    }
}

/// Result of one generation step.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Best tour found so far, across all generations.
    pub best_tour: Vec<usize>,

    /// Length of `best_tour`.
    pub best_distance: f64,

    /// Arithmetic mean of the tour lengths built this generation.
    pub mean_distance: f64,

    /// Number of generations run so far, including this one.
    pub generation: usize,

    /// Whether this generation found a new best tour.
    pub improved: bool,
}
