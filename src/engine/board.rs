//! The clock face as data: one main unit, the lower row and its rotator.

use std::time::Instant;

use crate::config::{LOWER_CLOCKS, Settings};
use crate::engine::clock::{ClockUnit, Moment};
use crate::engine::rotator::Rotator;
use crate::error::Result;
use crate::types::CityZone;
use log::debug;
use rand::rngs::StdRng;

pub struct ClockBoard {
    main: ClockUnit,
    lower: Vec<ClockUnit>,
    rotator: Rotator,
    rng: StdRng,
}

impl ClockBoard {
    /// Build every unit and give the lower row its first random cities.
    pub fn new(settings: &Settings, mut rng: StdRng, at: Moment) -> Result<Self> {
        let rotator = Rotator::new(
            settings.pool.clone(),
            settings.lower_update_interval,
            at.instant,
        )?;
        let main = ClockUnit::new(settings.main.clone(), settings.main_style.clone(), at)?;
        let lower = rotator
            .sample(&mut rng, LOWER_CLOCKS)
            .into_iter()
            .map(|entry| ClockUnit::new(entry, settings.lower_style.clone(), at))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            main,
            lower,
            rotator,
            rng,
        })
    }

    /// Run whatever timers are due and return the next deadline.
    pub fn tick(&mut self, at: Moment) -> Result<Instant> {
        if let Some(batch) = self.rotator.poll(at.instant, &mut self.rng) {
            for (unit, entry) in self.lower.iter_mut().zip(batch) {
                unit.reassign(entry, at)?;
            }
            debug!(
                "Rotated lower clocks: {}",
                self.lower
                    .iter()
                    .map(ClockUnit::label)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        self.main.tick(at)?;
        for unit in &mut self.lower {
            unit.tick(at)?;
        }
        Ok(self.next_deadline())
    }

    pub fn next_deadline(&self) -> Instant {
        self.lower
            .iter()
            .map(ClockUnit::next_due)
            .chain([self.main.next_due(), self.rotator.next_due()])
            .min()
            .unwrap_or_else(|| self.main.next_due())
    }

    pub fn main(&self) -> &ClockUnit {
        &self.main
    }

    pub fn lower(&self) -> &[ClockUnit] {
        &self.lower
    }

    pub fn rotation_pool(&self) -> &[CityZone] {
        self.rotator.pool()
    }
}
