pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_YEAR: u32 = 365;
pub const SECONDS_PER_HOUR: u32 = 3_600;
pub const SECONDS_PER_DAY: u32 = SECONDS_PER_HOUR * HOURS_PER_DAY;
pub const WATTS_PER_KILOWATT: u32 = 1_000;
pub const LITRES_PER_CUBIC_METRE: u32 = 1_000;
pub const GRAMS_PER_TONNE: u32 = 1_000_000;
pub const KILOJOULES_PER_WATT_HOUR: f64 = 3.6;

pub(crate) fn watt_hours_to_kilojoules(energy_wh: f64) -> f64 {
    energy_wh * KILOJOULES_PER_WATT_HOUR
}

pub(crate) fn kilojoules_to_watt_hours(energy_kj: f64) -> f64 {
    energy_kj / KILOJOULES_PER_WATT_HOUR
}

pub(crate) fn grams_to_tonnes(mass_g: f64) -> f64 {
    mass_g / GRAMS_PER_TONNE as f64
}
