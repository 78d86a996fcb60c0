use crate::core::units::LITRES_PER_CUBIC_METRE;
use std::sync::LazyLock;

/// This module contains data on the properties of materials carried by the
/// network pipework.

#[derive(Clone, Copy, Debug)]
pub struct MaterialProperties {
    density: f64,                // kg/litre
    specific_heat_capacity: f64, // J/(kg.K)
}

impl MaterialProperties {
    pub fn new(density: f64, specific_heat_capacity: f64) -> Self {
        Self {
            density,
            specific_heat_capacity,
        }
    }

    pub fn density_kg_per_m3(&self) -> f64 {
        self.density * LITRES_PER_CUBIC_METRE as f64
    }

    pub fn specific_heat_capacity(&self) -> f64 {
        self.specific_heat_capacity
    }

    pub fn specific_heat_capacity_kj_per_kg_k(&self) -> f64 {
        self.specific_heat_capacity / 1_000.
    }
}

pub static WATER: LazyLock<MaterialProperties> =
    LazyLock::new(|| MaterialProperties::new(1.0, 4180.0));

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    pub fn matprop() -> MaterialProperties {
        MaterialProperties::new(1.5, 4180.0)
    }

    #[rstest]
    pub fn should_have_correct_density(matprop: MaterialProperties) {
        assert_eq!(matprop.density_kg_per_m3(), 1_500.);
    }

    #[rstest]
    pub fn should_have_correct_specific_heat_capacity(matprop: MaterialProperties) {
        assert_eq!(
            matprop.specific_heat_capacity(),
            4180.0,
            "incorrect specific heat capacity returned"
        );
        assert_eq!(matprop.specific_heat_capacity_kj_per_kg_k(), 4.18);
    }

    #[rstest]
    pub fn water_heat_capacity_matches_litres_formula() {
        // litres formulae elsewhere rely on 4.18 kJ/(kg.K) for water
        assert_eq!(WATER.specific_heat_capacity_kj_per_kg_k(), 4.18);
    }
}
