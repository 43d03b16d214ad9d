//! Iteration driver around [`AcoEngine`].
//!
//! [`AcoSession`] holds what an interactive front end keeps between
//! refreshes: the chosen endpoints, the iteration budget, the engine, and
//! the latest report. Front ends call [`step`](AcoSession::step) once per
//! redraw; batch callers use [`run`](AcoSession::run).

use crate::aco::{check_endpoints, AcoConfig, AcoEngine, GenerationReport};
use crate::distance::DistanceMatrix;
use crate::error::AcoResult;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Outcome of driving a session to completion (or cancellation).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionResult {
    /// Best tour found, `None` if no generation ran.
    pub best_tour: Option<Vec<usize>>,

    /// Length of the best tour, `None` if no generation ran.
    pub best_distance: Option<f64>,

    /// Generations run over the session's lifetime.
    pub iterations: usize,

    /// Whether the run stopped because the cancel flag was set.
    pub cancelled: bool,

    /// Best distance after each generation.
    pub history: Vec<f64>,

    /// Mean tour length of the last generation.
    pub last_mean_distance: Option<f64>,
}

/// A colony bound to fixed endpoints and an iteration budget.
///
/// # Examples
///
/// ```
/// use wilaya_aco::aco::AcoConfig;
/// use wilaya_aco::session::AcoSession;
/// use wilaya_aco::wilayas;
///
/// let matrix = wilayas::distance_matrix().unwrap();
/// let config = AcoConfig::default()
///     .with_ant_count(10)
///     .with_max_iterations(5)
///     .with_seed(42);
/// let mut session = AcoSession::new(matrix, config, wilayas::DEFAULT_START, wilayas::DEFAULT_END).unwrap();
///
/// let result = session.run().unwrap();
/// assert_eq!(result.iterations, 5);
/// assert_eq!(result.history.len(), 5);
/// assert!(session.is_finished());
/// ```
#[derive(Debug, Clone)]
pub struct AcoSession {
    engine: AcoEngine,
    start: usize,
    end: usize,
    last: Option<GenerationReport>,
}

impl AcoSession {
    /// Creates a session. Endpoints are validated here so a bad pair
    /// fails before any generation runs.
    pub fn new(
        distances: DistanceMatrix,
        config: AcoConfig,
        start: usize,
        end: usize,
    ) -> AcoResult<Self> {
        check_endpoints(distances.size(), start, end)?;
        let engine = AcoEngine::new(distances, config)?;
        Ok(Self {
            engine,
            start,
            end,
            last: None,
        })
    }

    /// Runs one generation unless the budget is spent.
    ///
    /// Returns `Ok(None)` once [`is_finished`](Self::is_finished).
    pub fn step(&mut self) -> AcoResult<Option<GenerationReport>> {
        if self.is_finished() {
            return Ok(None);
        }

        let report = self.engine.run_generation(self.start, self.end)?;
        self.last = Some(report.clone());

        if self.is_finished() {
            info!(
                iterations = self.iteration(),
                best = report.best_distance,
                "session finished"
            );
        }
        Ok(Some(report))
    }

    /// Steps until the budget is spent.
    pub fn run(&mut self) -> AcoResult<SessionResult> {
        self.run_with_cancel(None)
    }

    /// Steps until the budget is spent or `cancel` is set.
    ///
    /// The flag is checked before every generation, so a flag that is
    /// already set stops the run before any work is done.
    pub fn run_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> AcoResult<SessionResult> {
        let mut cancelled = false;

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    info!(iterations = self.iteration(), "session cancelled");
                    break;
                }
            }
            if self.step()?.is_none() {
                break;
            }
        }

        Ok(SessionResult {
            best_tour: self.engine.best_tour().map(<[usize]>::to_vec),
            best_distance: self.engine.best_distance(),
            iterations: self.iteration(),
            cancelled,
            history: self.engine.history().to_vec(),
            last_mean_distance: self.last.as_ref().map(|r| r.mean_distance),
        })
    }

    /// Discards all progress: fresh trails, no best tour, iteration 0.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.last = None;
    }

    /// Changes the endpoints and resets the session.
    ///
    /// An invalid pair is rejected and the session is left as it was.
    pub fn set_endpoints(&mut self, start: usize, end: usize) -> AcoResult<()> {
        check_endpoints(self.engine.num_cities(), start, end)?;
        self.start = start;
        self.end = end;
        self.reset();
        Ok(())
    }

    /// Whether the iteration budget is spent.
    pub fn is_finished(&self) -> bool {
        self.iteration() >= self.max_iterations()
    }

    /// Fraction of the budget consumed, in `[0, 1]`. A zero budget
    /// reports 0.
    pub fn progress(&self) -> f64 {
        let max = self.max_iterations();
        if max == 0 {
            0.0
        } else {
            (self.iteration() as f64 / max as f64).min(1.0)
        }
    }

    /// Generations run so far.
    pub fn iteration(&self) -> usize {
        self.engine.generation()
    }

    /// The iteration budget.
    pub fn max_iterations(&self) -> usize {
        self.engine.config().max_iterations
    }

    /// Start city index.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End city index.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Report from the most recent generation.
    pub fn last_report(&self) -> Option<&GenerationReport> {
        self.last.as_ref()
    }

    /// The underlying engine.
    pub fn engine(&self) -> &AcoEngine {
        &self.engine
    }
}
