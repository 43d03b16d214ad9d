//! ACO configuration.

use crate::error::{AcoError, AcoResult};

/// Configuration for the ant colony.
///
/// # Defaults
///
/// ```
/// use wilaya_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.ant_count, 30);
/// assert_eq!(config.max_iterations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use wilaya_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ant_count(50)
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_evaporation_rate(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcoConfig {
    /// Number of ants constructing a tour each generation.
    ///
    /// Typical range: 10–100.
    pub ant_count: usize,

    /// Pheromone weight α (≥ 0). Higher values follow existing trails
    /// more closely.
    ///
    /// Typical range: 0–5.
    pub alpha: f64,

    /// Distance weight β (≥ 0). Higher values favor nearby cities.
    ///
    /// Typical range: 0–10.
    pub beta: f64,

    /// Evaporation rate ρ, strictly inside (0, 1). Every pheromone entry
    /// is multiplied by `1 - ρ` once per generation.
    ///
    /// Typical range: 0.1–0.9.
    pub evaporation_rate: f64,

    /// Deposit scale Q. A tour of length `L` deposits `Q / L` on each
    /// of its edges.
    pub deposit: f64,

    /// Number of generations a session runs before it stops.
    ///
    /// The engine itself has no budget; only the session reads this.
    /// Typical range: 50–500.
    pub max_iterations: usize,

    /// Minimum distance substituted for zero distances.
    ///
    /// `None` (the default) makes the engine reject matrices in which two
    /// distinct cities coincide. `Some(eps)` treats any edge shorter than
    /// `eps` as `eps` in the heuristic, and any tour shorter than `eps`
    /// as `eps` when depositing.
    pub distance_floor: Option<f64>,

    /// Whether to construct ant tours in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are
    /// identical to the sequential path.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ant_count: 30,
            alpha: 1.0,
            beta: 5.0,
            evaporation_rate: 0.5,
            deposit: 100.0,
            max_iterations: 200,
            distance_floor: None,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per generation.
    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    /// Sets the pheromone weight α.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the distance weight β.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate ρ.
    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    /// Sets the deposit scale Q.
    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    /// Sets the session iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Enables the minimum-distance floor.
    pub fn with_distance_floor(mut self, eps: f64) -> Self {
        self.distance_floor = Some(eps);
        self
    }

    /// Enables or disables parallel ant construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AcoResult<()> {
        if self.ant_count == 0 {
            return Err(AcoError::invalid("ant_count must be positive"));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::invalid(format!(
                "alpha must be finite and >= 0, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::invalid(format!(
                "beta must be finite and >= 0, got {}",
                self.beta
            )));
        }
        // Written so that NaN fails too.
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(AcoError::invalid(format!(
                "evaporation_rate must be in (0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if !self.deposit.is_finite() || self.deposit <= 0.0 {
            return Err(AcoError::invalid(format!(
                "deposit must be finite and positive, got {}",
                self.deposit
            )));
        }
        if let Some(eps) = self.distance_floor {
            if !eps.is_finite() || eps <= 0.0 {
                return Err(AcoError::invalid(format!(
                    "distance_floor must be finite and positive, got {eps}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.ant_count, 30);
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 5.0).abs() < 1e-10);
        assert!((config.evaporation_rate - 0.5).abs() < 1e-10);
        assert!((config.deposit - 100.0).abs() < 1e-10);
        assert!(config.distance_floor.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
        assert!(AcoConfig::default()
            .with_alpha(0.0)
            .with_beta(0.0)
            .with_max_iterations(0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_zero_ants() {
        let err = AcoConfig::default().with_ant_count(0).validate().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_validate_evaporation_bounds() {
        for rho in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let config = AcoConfig::default().with_evaporation_rate(rho);
            assert!(config.validate().is_err(), "rho = {rho} should be rejected");
        }
    }

    #[test]
    fn test_validate_negative_weights() {
        assert!(AcoConfig::default().with_alpha(-1.0).validate().is_err());
        assert!(AcoConfig::default().with_beta(-0.5).validate().is_err());
        assert!(AcoConfig::default()
            .with_beta(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_deposit_and_floor() {
        assert!(AcoConfig::default().with_deposit(0.0).validate().is_err());
        assert!(AcoConfig::default()
            .with_distance_floor(0.0)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_distance_floor(1e-9)
            .validate()
            .is_ok());
    }
}
