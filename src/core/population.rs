use crate::core::house_energy::MAX_TABLE_OCCUPANTS;
use crate::core::random_source::RandomSource;
use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

/// A single dwelling connected to the district heating network.
///
/// Attributes are drawn once at generation time and are immutable for the
/// rest of the run; the yearly loop only ever reads them.
#[derive(Clone, Copy, Debug)]
pub struct House {
    occupants: usize,
    floor_area_m2: f64,
    station_distance_m: f64,
}

impl House {
    pub fn new(
        occupants: usize,
        floor_area_m2: f64,
        station_distance_m: f64,
    ) -> Result<Self, PopulationError> {
        if occupants > MAX_TABLE_OCCUPANTS {
            return Err(PopulationError::OccupantsAboveTable { occupants });
        }
        Ok(Self {
            occupants,
            floor_area_m2,
            station_distance_m,
        })
    }

    pub fn occupants(&self) -> usize {
        self.occupants
    }

    pub fn floor_area_m2(&self) -> f64 {
        self.floor_area_m2
    }

    pub fn station_distance_m(&self) -> f64 {
        self.station_distance_m
    }
}

/// Inclusive bounds for each independently drawn house attribute.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeBounds {
    pub min: u32,
    pub max: u32,
}

impl AttributeBounds {
    fn validate(&self, attribute: &'static str) -> Result<(), PopulationError> {
        if self.min > self.max {
            return Err(PopulationError::InvalidBounds {
                attribute,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PopulationBounds {
    pub floor_area_m2: AttributeBounds,
    pub occupants: AttributeBounds,
    pub station_distance_m: AttributeBounds,
}

impl PopulationBounds {
    pub fn validate(&self) -> Result<(), PopulationError> {
        self.floor_area_m2.validate("floor_area_m2")?;
        self.occupants.validate("occupants")?;
        self.station_distance_m.validate("station_distance_m")?;
        if self.occupants.max as usize > MAX_TABLE_OCCUPANTS {
            return Err(PopulationError::OccupantsAboveTable {
                occupants: self.occupants.max as usize,
            });
        }
        Ok(())
    }
}

impl Default for PopulationBounds {
    fn default() -> Self {
        Self {
            floor_area_m2: AttributeBounds { min: 30, max: 200 },
            occupants: AttributeBounds { min: 1, max: 6 },
            station_distance_m: AttributeBounds { min: 100, max: 1_000 },
        }
    }
}

#[derive(Clone, Debug, Error)]
pub enum PopulationError {
    #[error("invalid bounds for {attribute}: min {min} is greater than max {max}")]
    InvalidBounds {
        attribute: &'static str,
        min: u32,
        max: u32,
    },
    #[error("house with {occupants} occupants exceeds the {MAX_TABLE_OCCUPANTS}-person hot water table")]
    OccupantsAboveTable { occupants: usize },
}

/// Generate the requested number of houses, each attribute drawn
/// independently and uniformly (integer, inclusive) from its bounds.
pub fn generate_houses(
    bounds: &PopulationBounds,
    number_of_houses: usize,
    random_source: &mut RandomSource,
) -> Result<Vec<House>, PopulationError> {
    bounds.validate()?;

    (0..number_of_houses)
        .map(|_| {
            random_source.with(|rng| {
                let occupants = rng.random_range(bounds.occupants.min..=bounds.occupants.max);
                let floor_area =
                    rng.random_range(bounds.floor_area_m2.min..=bounds.floor_area_m2.max);
                let distance = rng
                    .random_range(bounds.station_distance_m.min..=bounds.station_distance_m.max);
                House::new(occupants as usize, floor_area as f64, distance as f64)
            })
        })
        .collect()
}
