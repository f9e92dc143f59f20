//! Shared pseudo-random selection
//!
//! A single [`Selector`] is created at startup and shared by every request.
//! Draws are serialised through a mutex so concurrent handlers never observe
//! or advance the generator state at the same time.

use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

/// Upper bound used when picking an element from a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionBound {
    /// Draw from `[0, len - 1)`. The last element of a table is never chosen.
    ///
    /// This is the historical behaviour of the service and stays the default
    /// so existing clients see the same distribution.
    #[default]
    ExcludeLast,
    /// Draw from `[0, len)`.
    Full,
}

impl SelectionBound {
    /// Number of candidate indices for a table of `len` elements.
    fn span(self, len: usize) -> usize {
        match self {
            SelectionBound::ExcludeLast => len.saturating_sub(1),
            SelectionBound::Full => len,
        }
    }
}

/// Mutex-guarded generator used for every random draw in the process.
#[derive(Debug)]
pub struct Selector {
    rng: Mutex<fastrand::Rng>,
    bound: SelectionBound,
}

impl Selector {
    /// Create a selector seeded from the current wall-clock time.
    pub fn from_time(bound: SelectionBound) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        tracing::debug!(seed, ?bound, "Seeding random selector");
        Self::with_seed(seed, bound)
    }

    /// Create a selector with a fixed seed.
    pub fn with_seed(seed: u64, bound: SelectionBound) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
            bound,
        }
    }

    /// Pick one element of `items` uniformly within the configured bound.
    pub fn pick<'a>(&self, items: &[&'a str]) -> Result<&'a str> {
        let span = self.bound.span(items.len());
        if span == 0 {
            return Err(Error::invalid_argument(format!(
                "cannot pick from {} item(s) with {:?} bound",
                items.len(),
                self.bound
            )));
        }

        let idx = self.lock().usize(..span);
        Ok(items[idx])
    }

    /// Draw a uniform integer in `[0, max)`.
    pub fn below(&self, max: u32) -> Result<u32> {
        if max == 0 {
            return Err(Error::invalid_argument("upper bound must be positive"));
        }
        Ok(self.lock().u32(..max))
    }

    fn lock(&self) -> MutexGuard<'_, fastrand::Rng> {
        // A panic while holding the lock cannot leave the generator half-updated.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::from_time(SelectionBound::default())
    }
}
