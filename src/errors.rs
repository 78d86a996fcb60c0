use std::fmt::Display;
use thiserror::Error;

/// Stage of the daily calculation during which a run failed, reported so a
/// bad scenario can be traced to the day, house and computation that
/// rejected it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalculationStage {
    HouseEnergy,
    StationHouseTransmission,
    PlantStationTransmission,
}

impl Display for CalculationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CalculationStage::HouseEnergy => "house energy",
            CalculationStage::StationHouseTransmission => "station-house transmission",
            CalculationStage::PlantStationTransmission => "plant-station transmission",
        };
        write!(f, "{name}")
    }
}

/// A failed simulation run. There is no partial-year result: the first
/// violation aborts the whole run.
#[derive(Debug, Error)]
#[error("simulation failed on day {day}{} during {stage}: {source}", house_label(.house))]
pub struct SimulationError {
    pub day: u32,
    pub house: Option<usize>,
    pub stage: CalculationStage,
    #[source]
    pub source: anyhow::Error,
}

impl SimulationError {
    pub(crate) fn new(
        day: u32,
        house: Option<usize>,
        stage: CalculationStage,
        source: anyhow::Error,
    ) -> Self {
        Self {
            day,
            house,
            stage,
            source,
        }
    }
}

fn house_label(house: &Option<usize>) -> String {
    match house {
        Some(idx) => format!(", house {idx}"),
        None => String::new(),
    }
}
