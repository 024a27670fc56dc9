//! Probabilistic gating of log refreshes

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides, once per tick, whether the logs should be refreshed alongside
/// the status. Injected into the poller so tests can force the outcome.
pub trait RefreshGate: Send + Sync + std::fmt::Debug {
    fn should_refresh(&self) -> bool;
}

/// Uniform coin flip with the configured probability
#[derive(Debug)]
pub struct ProbabilityGate {
    probability: f64,
    rng: Mutex<StdRng>,
}

impl ProbabilityGate {
    /// Entropy-seeded gate for production use
    pub fn new(probability: f64) -> Self {
        Self::with_rng(probability, StdRng::from_entropy())
    }

    /// Deterministic gate for tests
    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self::with_rng(probability, StdRng::seed_from_u64(seed))
    }

    fn with_rng(probability: f64, rng: StdRng) -> Self {
        Self {
            probability,
            rng: Mutex::new(rng),
        }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RefreshGate for ProbabilityGate {
    fn should_refresh(&self) -> bool {
        // gen::<f64>() is uniform over [0, 1), so probability 1.0 always
        // passes and 0.0 never does
        self.rng().gen::<f64>() < self.probability
    }
}
