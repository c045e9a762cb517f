//! Periodic reassignment of the lower clocks to random cities.

use std::time::{Duration, Instant};

use crate::config::LOWER_CLOCKS;
use crate::engine::ticker::Ticker;
use crate::error::{AppError, Result};
use crate::types::CityZone;
use rand::Rng;
use rand::seq::index;

/// Owns the rotation pool and the rotation timer.
///
/// Every pass samples from the full pool, so a city shown in one pass may
/// reappear in the next; only duplicates within a pass are ruled out.
#[derive(Debug)]
pub struct Rotator {
    pool: Vec<CityZone>,
    ticker: Ticker,
}

impl Rotator {
    pub fn new(pool: Vec<CityZone>, interval: Duration, start: Instant) -> Result<Self> {
        if pool.len() < LOWER_CLOCKS {
            return Err(AppError::PoolTooSmall {
                available: pool.len(),
                needed: LOWER_CLOCKS,
            });
        }
        Ok(Self {
            pool,
            ticker: Ticker::new(interval, start),
        })
    }

    /// Draw `count` distinct entries in random order. Asking for more than
    /// the pool holds yields the whole pool, shuffled.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<CityZone> {
        let count = count.min(self.pool.len());
        index::sample(rng, self.pool.len(), count)
            .into_iter()
            .map(|i| self.pool[i].clone())
            .collect()
    }

    /// One rotation pass, if the interval has elapsed.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<Vec<CityZone>> {
        if self.ticker.poll(now) {
            Some(self.sample(rng, LOWER_CLOCKS))
        } else {
            None
        }
    }

    pub fn pool(&self) -> &[CityZone] {
        &self.pool
    }

    pub fn next_due(&self) -> Instant {
        self.ticker.next_due()
    }
}
