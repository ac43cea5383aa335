use rand::{Rng, RngCore};
use tracing::info;

use crate::generators::identifiers::uuid_digit;

/// Fixed set of identifiers shared by every generated record.
///
/// Correlated fields draw from the pool with replacement, so records that
/// share a value form a group that downstream consumers can join on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationPool {
    ids: Vec<String>,
}

impl CorrelationPool {
    /// Generate `amount` UUID-digit identifiers. Collisions are not removed.
    pub fn initialize(amount: usize, rng: &mut dyn RngCore) -> Self {
        let ids: Vec<String> = (0..amount).map(|_| uuid_digit(rng)).collect();
        info!(event = "pool_initialized", amount = ids.len(), "correlation pool initialized");
        Self { ids }
    }

    /// Uniform draw with replacement; `None` only for an empty pool.
    pub fn draw(&self, rng: &mut dyn RngCore) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.ids.len());
        self.ids.get(index).map(String::as_str)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, value: &str) -> bool {
        self.ids.iter().any(|id| id == value)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
