use crate::core::population::House;
use crate::core::units::{DAYS_PER_YEAR, HOURS_PER_DAY};
use thiserror::Error;

/// Rated heating power density of a dwelling, in W / m^2 of floor area.
pub const BOILER_POWER_W_PER_M2: f64 = 100.;

// Annual hot water and cooking energy use by household size, in Wh / year.
// Average values from dodavatelelektriny.cz.
const YEAR_WH_PER_OCCUPANTS: [f64; 11] = [
    0e3, 1_430e3, 2_580e3, 3_720e3, 4_590e3, 5_448e3, 6_309e3, 7_169e3, 8_029e3, 8_889e3, 9_750e3,
];

/// Largest household size covered by the annual hot water table.
pub const MAX_TABLE_OCCUPANTS: usize = YEAR_WH_PER_OCCUPANTS.len() - 1;

#[derive(Clone, Copy, Debug, Error)]
#[error("no annual hot water figure for a household of {occupants} (table covers 0..={MAX_TABLE_OCCUPANTS})")]
pub struct OccupantLookupError {
    occupants: usize,
}

/// Annual hot water and cooking energy use for a household of the given
/// size, in Wh / year.
pub fn year_hot_water_wh(occupants: usize) -> Result<f64, OccupantLookupError> {
    YEAR_WH_PER_OCCUPANTS
        .get(occupants)
        .copied()
        .ok_or(OccupantLookupError { occupants })
}

/// Daily CO2 emissions from space heating the house at the given fraction of
/// rated power, in g.
///
/// Arguments:
/// * `emission_factor` - emissions per unit of heat for the fuel, in g / Wh
/// * `heating_fraction` - fraction of rated power the heating runs at, in [0, 1]
pub fn area_emission(house: &House, emission_factor: f64, heating_fraction: f64) -> f64 {
    emission_factor * heating_fraction * house.floor_area_m2() * BOILER_POWER_W_PER_M2
        * HOURS_PER_DAY as f64
}

/// Daily CO2 emissions from the household's hot water and cooking use, in g.
pub fn people_emission(house: &House, emission_factor: f64) -> Result<f64, OccupantLookupError> {
    Ok(emission_factor * year_hot_water_wh(house.occupants())? / DAYS_PER_YEAR as f64)
}

/// Heat needed to keep the house warm for a day at the given heating
/// fraction, in Wh.
pub fn house_heat_loss_per_day(house: &House, heating_fraction: f64) -> f64 {
    heating_fraction * house.floor_area_m2() * BOILER_POWER_W_PER_M2 * HOURS_PER_DAY as f64
}

/// Heat needed for the household's hot water and cooking for a day, in Wh.
pub fn people_heat_loss_per_day(house: &House) -> Result<f64, OccupantLookupError> {
    Ok(year_hot_water_wh(house.occupants())? / DAYS_PER_YEAR as f64)
}
