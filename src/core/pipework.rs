use crate::core::material_properties::WATER;
use serde::Deserialize;
use std::f64::consts::PI;
use thiserror::Error;

/// Temperature of the soil surrounding a buried pipe, in deg C. The network
/// is sized against the design minimum ambient temperature.
pub const SOIL_TEMPERATURE_CELSIUS: f64 = -15.;

/// Thermal conductivity of the pipe insulation, in W / m K.
const INSULATION_CONDUCTIVITY: f64 = 0.5;

/// Convective heat transfer coefficient at the outer pipe surface, in W / m^2 K.
const EXTERNAL_HTC: f64 = 14.65;

/// Geometry and design flow of one pipe leg of the network. Each leg
/// (station to house, house return, plant to station) carries its own
/// explicit geometry and mass flow rate.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipeSpec {
    pub diameter_m: f64,
    pub insulation_thickness_m: f64,
    pub mass_flow_rate_kg_per_s: f64,
}

impl PipeSpec {
    pub fn validate(&self) -> Result<(), PipeGeometryError> {
        if self.diameter_m <= 0. {
            return Err(PipeGeometryError::non_positive("diameter_m", self.diameter_m));
        }
        if self.insulation_thickness_m < 0. {
            return Err(PipeGeometryError::non_positive(
                "insulation_thickness_m",
                self.insulation_thickness_m,
            ));
        }
        if self.mass_flow_rate_kg_per_s <= 0. {
            return Err(PipeGeometryError::non_positive(
                "mass_flow_rate_kg_per_s",
                self.mass_flow_rate_kg_per_s,
            ));
        }
        Ok(())
    }
}

/// An insulated pipe of a given length buried in soil at the design
/// minimum temperature, modelled as steady-state radial conduction.
#[derive(Clone, Copy, Debug)]
pub struct BuriedPipe {
    length_m: f64,
    thermal_resistance: f64, // combined insulation + surface term, in m K / W
    mass_flow_rate_kg_per_s: f64,
}

impl BuriedPipe {
    pub fn new(length_m: f64, spec: &PipeSpec) -> Result<Self, PipeGeometryError> {
        if length_m < 0. {
            return Err(PipeGeometryError::non_positive("length_m", length_m));
        }
        spec.validate()?;

        let outer_diameter = spec.diameter_m + 2. * spec.insulation_thickness_m;

        // insulation conduction term plus outer surface convection term
        let thermal_resistance = (outer_diameter / spec.diameter_m).ln()
            / (2. * INSULATION_CONDUCTIVITY)
            + 1. / (EXTERNAL_HTC * outer_diameter);

        Ok(Self {
            length_m,
            thermal_resistance,
            mass_flow_rate_kg_per_s: spec.mass_flow_rate_kg_per_s,
        })
    }

    /// Heat lost to the surrounding soil over the whole pipe length, in W.
    pub fn heat_loss_watts(&self, input_temperature: f64) -> f64 {
        PI * self.length_m * (input_temperature - SOIL_TEMPERATURE_CELSIUS)
            / self.thermal_resistance
    }

    /// Temperature of the water leaving the pipe, in deg C, for water
    /// entering at the given temperature.
    pub fn output_temperature(&self, input_temperature: f64) -> f64 {
        input_temperature
            - self.heat_loss_watts(input_temperature)
                / (self.mass_flow_rate_kg_per_s * WATER.specific_heat_capacity())
    }
}

#[derive(Clone, Copy, Debug, Error)]
pub enum PipeGeometryError {
    #[error("pipe parameter {parameter} must be positive, got {value}")]
    NonPositive {
        parameter: &'static str,
        value: f64,
    },
}

impl PipeGeometryError {
    fn non_positive(parameter: &'static str, value: f64) -> Self {
        Self::NonPositive { parameter, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::*;

    #[fixture]
    fn house_leg() -> PipeSpec {
        PipeSpec {
            diameter_m: 0.05,
            insulation_thickness_m: 0.05,
            mass_flow_rate_kg_per_s: 0.2,
        }
    }

    #[rstest]
    fn zero_length_pipe_has_no_loss(house_leg: PipeSpec) {
        let pipe = BuriedPipe::new(0., &house_leg).unwrap();
        assert_eq!(pipe.heat_loss_watts(60.), 0.);
        assert_eq!(pipe.output_temperature(60.), 60.);
    }

    #[rstest]
    fn output_temperature_strictly_decreases_with_length(house_leg: PipeSpec) {
        let mut previous = f64::INFINITY;
        for length in [1., 10., 100., 500., 1_000.] {
            let pipe = BuriedPipe::new(length, &house_leg).unwrap();
            let output = pipe.output_temperature(60.);
            assert!(output < previous, "length {length}: {output} >= {previous}");
            previous = output;
        }
    }

    #[rstest]
    fn water_at_soil_temperature_loses_nothing(house_leg: PipeSpec) {
        let pipe = BuriedPipe::new(500., &house_leg).unwrap();
        assert_eq!(pipe.heat_loss_watts(SOIL_TEMPERATURE_CELSIUS), 0.);
        assert_eq!(
            pipe.output_temperature(SOIL_TEMPERATURE_CELSIUS),
            SOIL_TEMPERATURE_CELSIUS
        );
    }

    #[rstest]
    fn should_have_correct_heat_loss(house_leg: PipeSpec) {
        // resistance = ln(0.15/0.05)/(2*0.5) + 1/(14.65*0.15) = 1.55372...
        // loss = pi * 100 * (60 - -15) / resistance
        let pipe = BuriedPipe::new(100., &house_leg).unwrap();
        assert_relative_eq!(pipe.heat_loss_watts(60.), 15_165.2997, max_relative = 1e-6);
    }

    #[rstest]
    fn should_have_correct_output_temperature(house_leg: PipeSpec) {
        let pipe = BuriedPipe::new(100., &house_leg).unwrap();
        let expected_drop = 15_165.2997 / (0.2 * 4_180.);
        assert_relative_eq!(
            pipe.output_temperature(60.),
            60. - expected_drop,
            max_relative = 1e-6
        );
    }

    #[rstest]
    fn spec_validation_matches_construction_checks(house_leg: PipeSpec) {
        assert!(house_leg.validate().is_ok());
        assert!(PipeSpec {
            diameter_m: -0.05,
            ..house_leg
        }
        .validate()
        .is_err());
    }

    #[rstest]
    fn should_reject_non_positive_geometry(house_leg: PipeSpec) {
        assert!(BuriedPipe::new(-1., &house_leg).is_err());
        assert!(BuriedPipe::new(
            100.,
            &PipeSpec {
                diameter_m: 0.,
                ..house_leg
            }
        )
        .is_err());
        assert!(BuriedPipe::new(
            100.,
            &PipeSpec {
                mass_flow_rate_kg_per_s: 0.,
                ..house_leg
            }
        )
        .is_err());
        assert!(BuriedPipe::new(
            100.,
            &PipeSpec {
                insulation_thickness_m: -0.01,
                ..house_leg
            }
        )
        .is_err());
    }
}
