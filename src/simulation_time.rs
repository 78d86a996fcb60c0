use crate::core::units::DAYS_PER_YEAR;

/// The simulated period: whole days 1..=365, stepped through sequentially.
/// Day 0 exists only to prime yesterday's temperature for the hysteresis.
#[derive(Clone, Copy, Debug)]
pub struct SimulationYear {
    first_day: u32,
    last_day: u32,
}

impl SimulationYear {
    pub fn new() -> Self {
        Self {
            first_day: 1,
            last_day: DAYS_PER_YEAR,
        }
    }

    pub fn days(&self) -> impl Iterator<Item = SimulationDay> {
        (self.first_day..=self.last_day).map(|index| SimulationDay { index })
    }
}

impl Default for SimulationYear {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SimulationDay {
    pub index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn year_iterates_365_sequential_days() {
        let year = SimulationYear::new();
        let days: Vec<u32> = year.days().map(|day| day.index).collect();
        assert_eq!(days.len(), 365);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&365));
        assert!(days.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }
}
