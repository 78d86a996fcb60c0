use crate::compare_floats::clamp;

/// Ambient temperature at or below which two consecutive days switch the
/// heating season on (and at or above which they switch it off), per the
/// heating season rules of the Czech Ministry of the Environment.
pub const HEATING_THRESHOLD_CELSIUS: f64 = 13.;

/// Design minimum ambient temperature; at or below this the network runs at
/// full output.
pub const DESIGN_MINIMUM_CELSIUS: f64 = -15.;

/// Update the heating-on flag from today's and yesterday's temperatures.
///
/// The flag only flips after two consecutive days on the same side of the
/// threshold; a single day straddling it leaves the previous state in place.
pub fn update_heating_on(today: f64, yesterday: f64, heating_on: bool) -> bool {
    if today <= HEATING_THRESHOLD_CELSIUS && yesterday <= HEATING_THRESHOLD_CELSIUS {
        true
    } else if today >= HEATING_THRESHOLD_CELSIUS && yesterday >= HEATING_THRESHOLD_CELSIUS {
        false
    } else {
        heating_on
    }
}

/// Fraction of rated heating power the network runs at for the given ambient
/// temperature, in [0, 1].
///
/// The linear ramp between the threshold and the design minimum is squared,
/// giving a response curve that stays shallow in mild weather and steepens
/// towards the design minimum.
pub fn heating_fraction(temperature: f64, heating_on: bool) -> f64 {
    if !heating_on {
        return 0.;
    }

    let clamped = clamp(temperature, DESIGN_MINIMUM_CELSIUS, HEATING_THRESHOLD_CELSIUS);
    let ramp = (HEATING_THRESHOLD_CELSIUS - clamped)
        / (HEATING_THRESHOLD_CELSIUS - DESIGN_MINIMUM_CELSIUS);

    ramp * ramp
}
