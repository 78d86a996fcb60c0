use serde::Deserialize;
use std::fmt::Display;

/// Heat sources compared by the decision layer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FuelKind {
    Gas,
    Coal,
    Electricity,
    Nuclear,
}

impl FuelKind {
    /// The fossil (and grid) comparators tracked through the yearly loop.
    pub const FOSSIL: [FuelKind; 3] = [FuelKind::Gas, FuelKind::Coal, FuelKind::Electricity];
}

impl Display for FuelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FuelKind::Gas => "gas",
            FuelKind::Coal => "coal",
            FuelKind::Electricity => "electricity",
            FuelKind::Nuclear => "nuclear",
        };
        write!(f, "{name}")
    }
}

/// CO2 emitted per unit of delivered heat for each heat source, in g / Wh.
/// Supplied by scenario configuration; defaults are average values for
/// household heating.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EmissionFactors {
    pub gas: f64,
    pub coal: f64,
    pub electricity: f64,
    pub nuclear: f64,
}

impl EmissionFactors {
    pub fn factor(&self, fuel: FuelKind) -> f64 {
        match fuel {
            FuelKind::Gas => self.gas,
            FuelKind::Coal => self.coal,
            FuelKind::Electricity => self.electricity,
            FuelKind::Nuclear => self.nuclear,
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            gas: 0.2,
            coal: 0.36,
            electricity: 0.32,
            nuclear: 0.012,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn factor_lookup_matches_fields() {
        let factors = EmissionFactors::default();
        assert_eq!(factors.factor(FuelKind::Gas), factors.gas);
        assert_eq!(factors.factor(FuelKind::Coal), factors.coal);
        assert_eq!(factors.factor(FuelKind::Electricity), factors.electricity);
        assert_eq!(factors.factor(FuelKind::Nuclear), factors.nuclear);
    }

    #[rstest]
    fn fossil_comparators_exclude_nuclear() {
        assert!(!FuelKind::FOSSIL.contains(&FuelKind::Nuclear));
        assert_eq!(FuelKind::FOSSIL.len(), 3);
    }

    #[rstest]
    fn fuel_kind_displays_lowercase_names() {
        assert_eq!(FuelKind::Electricity.to_string(), "electricity");
    }
}
