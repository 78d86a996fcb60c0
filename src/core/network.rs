use crate::compare_floats::max_of_2;
use crate::core::emissions::{EmissionFactors, FuelKind};
use crate::core::heating_control::{heating_fraction, update_heating_on};
use crate::core::house_energy::{
    area_emission, house_heat_loss_per_day, people_emission, people_heat_loss_per_day,
};
use crate::core::material_properties::WATER;
use crate::core::pipework::BuriedPipe;
use crate::core::population::House;
use crate::core::random_source::RandomSource;
use crate::core::units::{kilojoules_to_watt_hours, watt_hours_to_kilojoules, DAYS_PER_YEAR};
use crate::core::weather::Weather;
use crate::errors::{CalculationStage, SimulationError};
use crate::input::NetworkParameters;
use crate::simulation_time::SimulationYear;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Below this temperature differential a litres computation is rejected
/// rather than allowed to blow up towards infinity.
const MIN_USABLE_DELTA_K: f64 = 0.5;

#[derive(Clone, Copy, Debug, Error)]
pub enum TransmissionError {
    #[error("water arrives at {node} at {arrival_temperature:.2} C, within {MIN_USABLE_DELTA_K} K of the {reference_temperature} C reference temperature")]
    NoTemperatureDifferential {
        node: &'static str,
        arrival_temperature: f64,
        reference_temperature: f64,
    },
}

/// Water volume needed to carry the given energy into a node, from
/// `kJ = c * litres * deltaT` with water at 1 kg per litre.
fn litres_for_energy(
    energy_wh: f64,
    arrival_temperature: f64,
    reference_temperature: f64,
    node: &'static str,
) -> Result<f64, TransmissionError> {
    let delta_t = arrival_temperature - reference_temperature;
    if delta_t < MIN_USABLE_DELTA_K {
        return Err(TransmissionError::NoTemperatureDifferential {
            node,
            arrival_temperature,
            reference_temperature,
        });
    }
    Ok(watt_hours_to_kilojoules(energy_wh)
        / (WATER.specific_heat_capacity_kj_per_kg_k() * delta_t))
}

/// Energy given up by a volume of water cooling from entry to exit
/// temperature along one pipe leg, in Wh.
fn leg_loss_wh(litres: f64, entry_temperature: f64, exit_temperature: f64) -> f64 {
    kilojoules_to_watt_hours(
        WATER.specific_heat_capacity_kj_per_kg_k() * litres * (entry_temperature - exit_temperature),
    )
}

/// Heat and water the station must send towards one house for one day.
#[derive(Clone, Copy, Debug)]
pub struct StationHouseDelivery {
    /// Heat the station must put into the house legs, in Wh: house demand
    /// plus the transmission losses of the supply and return legs.
    pub delivered_wh: f64,
    pub heating_litres: f64,
    pub cooking_litres: f64,
}

/// Daily heat and water volume the station draws from one house connection.
///
/// Water leaves the station at the supply temperature and cools on the way
/// out; heating water returns at the house return temperature and cools
/// again on the way back, while hot water draw-off is replaced from
/// treatment water and does not return.
pub fn station_house_transmission(
    house: &House,
    heating_fraction: f64,
    network: &NetworkParameters,
) -> anyhow::Result<StationHouseDelivery> {
    let pipe = BuriedPipe::new(house.station_distance_m(), &network.house_leg)?;
    let supply_at_house = pipe.output_temperature(network.supply_temperature_celsius);

    let heating_wh = house_heat_loss_per_day(house, heating_fraction);
    let cooking_wh = people_heat_loss_per_day(house)?;

    let heating_litres = litres_for_energy(
        heating_wh,
        supply_at_house,
        network.house_return_temperature_celsius,
        "house radiators",
    )?;
    let cooking_litres = litres_for_energy(
        cooking_wh,
        supply_at_house,
        network.treatment_water_temperature_celsius,
        "hot water draw-off",
    )?;

    let supply_loss_wh = leg_loss_wh(
        heating_litres + cooking_litres,
        network.supply_temperature_celsius,
        supply_at_house,
    );
    let return_at_station = pipe.output_temperature(network.house_return_temperature_celsius);
    let return_loss_wh = leg_loss_wh(
        heating_litres,
        network.house_return_temperature_celsius,
        return_at_station,
    );

    Ok(StationHouseDelivery {
        delivered_wh: heating_wh + cooking_wh + supply_loss_wh + return_loss_wh,
        heating_litres,
        cooking_litres,
    })
}

#[derive(Clone, Copy, Debug)]
pub struct PlantStationDelivery {
    /// Energy the plant must generate to cover the station's day, in Wh,
    /// including the plant leg loss and the plant-side loss multiplier.
    pub plant_energy_wh: f64,
    /// Station makeup water moved from the plant, in litres.
    pub litres: f64,
}

/// Daily energy the generation plant must put into the station node.
pub fn plant_station_transmission(
    station_heat_loss_wh: f64,
    network: &NetworkParameters,
) -> anyhow::Result<PlantStationDelivery> {
    let pipe = BuriedPipe::new(network.plant_distance_m, &network.plant_leg)?;
    let supply_at_station = pipe.output_temperature(network.plant_supply_temperature_celsius);

    let litres = litres_for_energy(
        station_heat_loss_wh,
        supply_at_station,
        network.station_return_temperature_celsius,
        "station heat exchanger",
    )?;
    let loss_wh = leg_loss_wh(
        litres,
        network.plant_supply_temperature_celsius,
        supply_at_station,
    );

    Ok(PlantStationDelivery {
        plant_energy_wh: (station_heat_loss_wh + loss_wh) * network.plant_loss_multiplier,
        litres,
    })
}

/// One simulated day, kept only when per-day records are requested. The
/// emission columns are running year-to-date totals, not daily values.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct DayRecord {
    pub day: u32,
    pub temperature: f64,
    pub heating_on: bool,
    pub heating_fraction: f64,
    pub litres_heating: f64,
    pub litres_cooking: f64,
    pub litres_station: f64,
    pub station_heat_loss_wh: f64,
    pub emissions_gas_g: f64,
    pub emissions_coal_g: f64,
    pub emissions_electricity_g: f64,
}

/// Running totals over one simulated year. All sums only ever grow; daily
/// litres are folded in once per day after the per-house loop.
#[derive(Clone, Debug)]
pub struct YearResults {
    pub fossil_emissions_g: IndexMap<FuelKind, f64>,
    pub plant_energy_wh: f64,
    pub station_heat_loss_wh: f64,
    pub litres_heating: f64,
    pub litres_cooking: f64,
    pub litres_station: f64,
    pub peak_day_litres_heating: f64,
    pub peak_day_litres_cooking: f64,
    pub peak_day_litres_station: f64,
    pub heating_days: u32,
    pub temperature_sum: f64,
    pub daily: Vec<DayRecord>,
}

impl YearResults {
    fn new() -> Self {
        Self {
            fossil_emissions_g: FuelKind::FOSSIL.iter().map(|fuel| (*fuel, 0.)).collect(),
            plant_energy_wh: 0.,
            station_heat_loss_wh: 0.,
            litres_heating: 0.,
            litres_cooking: 0.,
            litres_station: 0.,
            peak_day_litres_heating: 0.,
            peak_day_litres_cooking: 0.,
            peak_day_litres_station: 0.,
            heating_days: 0,
            temperature_sum: 0.,
            daily: vec![],
        }
    }

    pub fn mean_temperature(&self) -> f64 {
        self.temperature_sum / DAYS_PER_YEAR as f64
    }
}

/// Drive the 365-day loop: draw the day's temperature, update the heating
/// hysteresis, accumulate per-house energy and emissions, push the day's
/// station load through the plant leg, and fold daily litres into yearly
/// sums and peaks. Houses are visited in order so that seeded runs are
/// bit-reproducible. The first violation aborts the run with the day, house
/// and stage that triggered it.
pub fn simulate_one_year(
    houses: &[House],
    network: &NetworkParameters,
    emission_factors: &EmissionFactors,
    random_source: &mut RandomSource,
    record_days: bool,
) -> anyhow::Result<YearResults> {
    let weather = Weather::new()?;
    let mut results = YearResults::new();

    // day 0 primes the hysteresis; the heating season starts switched on
    let mut heating_on = true;
    let mut yesterday = weather.temperature(0, random_source);

    for day in SimulationYear::new().days() {
        let today = weather.temperature(day.index, random_source);
        heating_on = update_heating_on(today, yesterday, heating_on);
        let fraction = heating_fraction(today, heating_on);

        results.temperature_sum += today;
        if heating_on {
            results.heating_days += 1;
        }

        let mut day_litres_heating = 0.;
        let mut day_litres_cooking = 0.;
        let mut day_station_wh = 0.;

        for (house_idx, house) in houses.iter().enumerate() {
            for fuel in FuelKind::FOSSIL {
                let factor = emission_factors.factor(fuel);
                let hot_water_emission = people_emission(house, factor).map_err(|error| {
                    SimulationError::new(
                        day.index,
                        Some(house_idx),
                        CalculationStage::HouseEnergy,
                        error.into(),
                    )
                })?;
                let day_emission = area_emission(house, factor, fraction) + hot_water_emission;
                results.fossil_emissions_g[&fuel] += day_emission;
            }

            let delivery = station_house_transmission(house, fraction, network).map_err(|error| {
                SimulationError::new(
                    day.index,
                    Some(house_idx),
                    CalculationStage::StationHouseTransmission,
                    error,
                )
            })?;
            day_station_wh += delivery.delivered_wh;
            day_litres_heating += delivery.heating_litres;
            day_litres_cooking += delivery.cooking_litres;
        }

        let plant = plant_station_transmission(day_station_wh, network).map_err(|error| {
            SimulationError::new(
                day.index,
                None,
                CalculationStage::PlantStationTransmission,
                error,
            )
        })?;

        results.station_heat_loss_wh += day_station_wh;
        results.plant_energy_wh += plant.plant_energy_wh;
        results.litres_heating += day_litres_heating;
        results.litres_cooking += day_litres_cooking;
        results.litres_station += plant.litres;
        results.peak_day_litres_heating =
            max_of_2(results.peak_day_litres_heating, day_litres_heating);
        results.peak_day_litres_cooking =
            max_of_2(results.peak_day_litres_cooking, day_litres_cooking);
        results.peak_day_litres_station = max_of_2(results.peak_day_litres_station, plant.litres);

        tracing::debug!(
            day = day.index,
            temperature = today,
            heating_on,
            heating_fraction = fraction,
            station_heat_loss_wh = day_station_wh,
            "simulated day"
        );

        if record_days {
            results.daily.push(DayRecord {
                day: day.index,
                temperature: today,
                heating_on,
                heating_fraction: fraction,
                litres_heating: day_litres_heating,
                litres_cooking: day_litres_cooking,
                litres_station: plant.litres,
                station_heat_loss_wh: day_station_wh,
                emissions_gas_g: results.fossil_emissions_g[&FuelKind::Gas],
                emissions_coal_g: results.fossil_emissions_g[&FuelKind::Coal],
                emissions_electricity_g: results.fossil_emissions_g[&FuelKind::Electricity],
            });
        }

        yesterday = today;
    }

    Ok(results)
}
