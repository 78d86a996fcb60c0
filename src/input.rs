use crate::core::emissions::EmissionFactors;
use crate::core::pipework::PipeSpec;
use crate::core::population::PopulationBounds;
use anyhow::{bail, Context};
use serde::Deserialize;
use std::io::Read;

/// A complete scenario for one run. Every section has defaults covering the
/// reference scenario, so an empty JSON object (or no input file at all) is
/// a valid input.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Input {
    pub simulation: SimulationSettings,
    pub population: PopulationBounds,
    pub network: NetworkParameters,
    pub emission_factors: EmissionFactors,
    pub decision: DecisionParameters,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SimulationSettings {
    pub number_of_houses: usize,
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            number_of_houses: 50,
            seed: None,
        }
    }
}

/// Temperatures, distances and per-leg pipe design of the network. Each leg
/// carries its own explicit geometry and design flow; nothing is shared
/// between the house legs and the plant leg.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct NetworkParameters {
    /// Water temperature leaving the station towards houses, in deg C.
    pub supply_temperature_celsius: f64,
    /// Temperature of heating water returning from a house, in deg C.
    pub house_return_temperature_celsius: f64,
    /// Temperature of treatment water replacing hot water draw-off, in deg C.
    pub treatment_water_temperature_celsius: f64,
    /// Water temperature leaving the plant towards the station, in deg C.
    pub plant_supply_temperature_celsius: f64,
    /// Temperature of water returning from the station to the plant, in deg C.
    pub station_return_temperature_celsius: f64,
    /// Length of the plant-station leg, in m.
    pub plant_distance_m: f64,
    /// Plant-side losses applied on top of the transported energy.
    pub plant_loss_multiplier: f64,
    pub house_leg: PipeSpec,
    pub plant_leg: PipeSpec,
}

impl Default for NetworkParameters {
    fn default() -> Self {
        Self {
            supply_temperature_celsius: 60.,
            house_return_temperature_celsius: 40.,
            treatment_water_temperature_celsius: 10.,
            plant_supply_temperature_celsius: 90.,
            station_return_temperature_celsius: 60.,
            plant_distance_m: 5.,
            plant_loss_multiplier: 1.01,
            house_leg: PipeSpec {
                diameter_m: 0.05,
                insulation_thickness_m: 0.05,
                mass_flow_rate_kg_per_s: 3.,
            },
            plant_leg: PipeSpec {
                diameter_m: 0.5,
                insulation_thickness_m: 0.1,
                mass_flow_rate_kg_per_s: 10.,
            },
        }
    }
}

/// Constants consumed by the report/decision layer only.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DecisionParameters {
    /// CO2 emitted building the nuclear alternative, in g.
    pub nuclear_construction_emissions_g: f64,
    /// Head the station pumps work against, in m.
    pub pump_head_m: f64,
    /// Overall pump efficiency, in (0, 1].
    pub pump_efficiency: f64,
}

impl Default for DecisionParameters {
    fn default() -> Self {
        Self {
            nuclear_construction_emissions_g: 3.0e9,
            pump_head_m: 50.,
            pump_efficiency: 0.7,
        }
    }
}

impl Input {
    pub fn validate(&self) -> anyhow::Result<()> {
        self.population.validate()?;

        let network = &self.network;
        if network.supply_temperature_celsius <= network.house_return_temperature_celsius {
            bail!(
                "supply temperature ({}) must exceed the house return temperature ({})",
                network.supply_temperature_celsius,
                network.house_return_temperature_celsius
            );
        }
        if network.supply_temperature_celsius <= network.treatment_water_temperature_celsius {
            bail!(
                "supply temperature ({}) must exceed the treatment water temperature ({})",
                network.supply_temperature_celsius,
                network.treatment_water_temperature_celsius
            );
        }
        if network.plant_supply_temperature_celsius <= network.station_return_temperature_celsius {
            bail!(
                "plant supply temperature ({}) must exceed the station return temperature ({})",
                network.plant_supply_temperature_celsius,
                network.station_return_temperature_celsius
            );
        }
        if network.plant_loss_multiplier < 1. {
            bail!(
                "plant loss multiplier must be at least 1, got {}",
                network.plant_loss_multiplier
            );
        }
        network.house_leg.validate().context("house leg pipe")?;
        network.plant_leg.validate().context("plant leg pipe")?;
        if !(0. ..=1.).contains(&self.decision.pump_efficiency)
            || self.decision.pump_efficiency == 0.
        {
            bail!(
                "pump efficiency must be in (0, 1], got {}",
                self.decision.pump_efficiency
            );
        }

        Ok(())
    }
}

/// Read and validate a JSON scenario.
pub fn ingest(input: impl Read) -> anyhow::Result<Input> {
    let input: Input =
        serde_json::from_reader(input).context("could not parse scenario input as JSON")?;
    input.validate()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn empty_object_is_the_reference_scenario() {
        let input = ingest("{}".as_bytes()).unwrap();
        assert_eq!(input.simulation.number_of_houses, 50);
        assert_eq!(input.network.supply_temperature_celsius, 60.);
        assert_eq!(input.network.plant_distance_m, 5.);
        assert_eq!(input.emission_factors.gas, 0.2);
    }

    #[rstest]
    fn default_input_validates() {
        assert!(Input::default().validate().is_ok());
    }

    #[rstest]
    fn sections_can_be_overridden_independently() {
        let input = ingest(
            r#"{
                "simulation": {"number_of_houses": 1, "seed": 42},
                "emission_factors": {"gas": 0.25},
                "network": {"supply_temperature_celsius": 70.0}
            }"#
            .as_bytes(),
        )
        .unwrap();
        assert_eq!(input.simulation.number_of_houses, 1);
        assert_eq!(input.simulation.seed, Some(42));
        assert_eq!(input.emission_factors.gas, 0.25);
        assert_eq!(input.emission_factors.coal, 0.36, "untouched default kept");
        assert_eq!(input.network.supply_temperature_celsius, 70.);
        assert_eq!(input.network.house_return_temperature_celsius, 40.);
    }

    #[rstest]
    fn unknown_fields_are_rejected() {
        assert!(ingest(r#"{"simulation": {"number_of_homes": 3}}"#.as_bytes()).is_err());
    }

    #[rstest]
    fn inverted_supply_and_return_temperatures_are_rejected() {
        let result = ingest(
            r#"{"network": {"supply_temperature_celsius": 35.0}}"#.as_bytes(),
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn inverted_population_bounds_are_rejected() {
        let result = ingest(
            r#"{"population": {
                "floor_area_m2": {"min": 200, "max": 30},
                "occupants": {"min": 1, "max": 6},
                "station_distance_m": {"min": 100, "max": 1000}
            }}"#
            .as_bytes(),
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn degenerate_pipe_geometry_is_rejected_at_ingest() {
        let result = ingest(
            r#"{"network": {"house_leg": {
                "diameter_m": 0.0,
                "insulation_thickness_m": 0.05,
                "mass_flow_rate_kg_per_s": 3.0
            }}}"#
            .as_bytes(),
        );
        assert!(result.is_err());

        let result = ingest(
            r#"{"network": {"plant_leg": {
                "diameter_m": 0.5,
                "insulation_thickness_m": 0.1,
                "mass_flow_rate_kg_per_s": 0.0
            }}}"#
            .as_bytes(),
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn zero_pump_efficiency_is_rejected() {
        let result = ingest(r#"{"decision": {"pump_efficiency": 0.0}}"#.as_bytes());
        assert!(result.is_err());
    }
}
