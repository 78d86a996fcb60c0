use crate::core::random_source::RandomSource;
use crate::core::units::DAYS_PER_YEAR;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

// Seasonal sinusoid fitted to long-term daily means for the Dukovany region.
// The phase shift puts the coldest point of the curve near day 0/365.
const SEASONAL_AMPLITUDE_K: f64 = 10.;
const SEASONAL_PHASE_DAYS: f64 = 274.;
const ANNUAL_MEAN_CELSIUS: f64 = 7.;
const NOISE_STD_DEV_K: f64 = 2.5;

/// Daily ambient temperature model: a deterministic seasonal component plus
/// Gaussian day-to-day noise drawn from the injected random source.
#[derive(Debug)]
pub struct Weather {
    noise: Normal<f64>,
}

impl Weather {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            noise: Normal::new(0., NOISE_STD_DEV_K)?,
        })
    }

    /// Ambient temperature for the given day of the year, in deg C.
    ///
    /// Arguments:
    /// * `day` - day of the year, in 0..=365
    /// * `random_source` - source for the additive noise component
    pub fn temperature(&self, day: u32, random_source: &mut RandomSource) -> f64 {
        Self::seasonal_temperature(day) + random_source.with(|rng| self.noise.sample(rng))
    }

    /// The deterministic seasonal component on its own, in deg C.
    pub fn seasonal_temperature(day: u32) -> f64 {
        SEASONAL_AMPLITUDE_K
            * (2. * PI * (day as f64 + SEASONAL_PHASE_DAYS) / DAYS_PER_YEAR as f64).sin()
            + ANNUAL_MEAN_CELSIUS
    }
}
