use crate::core::emissions::FuelKind;
use crate::core::material_properties::WATER;
use crate::core::network::YearResults;
use crate::core::units::{
    grams_to_tonnes, LITRES_PER_CUBIC_METRE, SECONDS_PER_DAY, WATTS_PER_KILOWATT,
};
use crate::input::Input;
use crate::output::Output;
use csv::WriterBuilder;
use itertools::Itertools;
use std::io::Write;

const GRAVITY_M_PER_S2: f64 = 9.81;

/// Average hydraulic pump power needed to move the peak day's water volume
/// against the configured head, in W.
pub fn pump_power_watts(peak_day_litres: f64, head_m: f64, efficiency: f64) -> f64 {
    let flow_m3_per_s = peak_day_litres / LITRES_PER_CUBIC_METRE as f64 / SECONDS_PER_DAY as f64;
    WATER.density_kg_per_m3() * GRAVITY_M_PER_S2 * head_m * flow_m3_per_s / efficiency
}

/// Annual emissions had the plant's output come from the nuclear
/// alternative, in g.
pub fn nuclear_annual_emissions_g(nuclear_factor: f64, plant_energy_wh: f64) -> f64 {
    nuclear_factor * plant_energy_wh
}

/// Years for the nuclear alternative's construction emissions to be repaid
/// by its annual advantage over a fossil comparator. `None` when the fossil
/// source emits no more than nuclear, so the construction never pays back.
pub fn payback_years(
    construction_emissions_g: f64,
    fossil_annual_g: f64,
    nuclear_annual_g: f64,
) -> Option<f64> {
    let annual_advantage = fossil_annual_g - nuclear_annual_g;
    (annual_advantage > 0.).then(|| construction_emissions_g / annual_advantage)
}

/// Post-process the year totals into the printed report: totals and peaks,
/// the pump power estimate, the nuclear comparison and payback figures, and
/// (when per-day records were kept) a per-day CSV.
pub fn write_report(
    output: &impl Output,
    input: &Input,
    number_of_houses: usize,
    results: &YearResults,
) -> anyhow::Result<()> {
    if !output.is_noop() {
        write_summary(output, input, number_of_houses, results)?;
        if !results.daily.is_empty() {
            write_day_records(output, results)?;
        }
    }

    Ok(())
}

fn write_summary(
    output: &impl Output,
    input: &Input,
    number_of_houses: usize,
    results: &YearResults,
) -> anyhow::Result<()> {
    let mut writer = output.writer_for_location_key("summary.txt")?;

    writeln!(
        writer,
        "District heating network: {number_of_houses} houses, one simulated year"
    )?;
    writeln!(
        writer,
        "Mean ambient temperature: {:.1} degC, heating on for {} days",
        results.mean_temperature(),
        results.heating_days
    )?;
    writeln!(
        writer,
        "Heat delivered by station: {:.1} MWh (plant output {:.1} MWh)",
        results.station_heat_loss_wh / 1e6,
        results.plant_energy_wh / 1e6
    )?;
    writeln!(
        writer,
        "Water delivered: heating {:.0} m3 (peak day {:.0} l), hot water {:.0} m3 (peak day {:.0} l), station makeup {:.0} m3 (peak day {:.0} l)",
        results.litres_heating / LITRES_PER_CUBIC_METRE as f64,
        results.peak_day_litres_heating,
        results.litres_cooking / LITRES_PER_CUBIC_METRE as f64,
        results.peak_day_litres_cooking,
        results.litres_station / LITRES_PER_CUBIC_METRE as f64,
        results.peak_day_litres_station,
    )?;
    writeln!(
        writer,
        "Station pump power on the peak day: {:.2} kW",
        pump_power_watts(
            results.peak_day_litres_station,
            input.decision.pump_head_m,
            input.decision.pump_efficiency,
        ) / WATTS_PER_KILOWATT as f64
    )?;

    let nuclear_annual_g = nuclear_annual_emissions_g(
        input.emission_factors.nuclear,
        results.plant_energy_wh,
    );
    writeln!(
        writer,
        "Annual emissions by heat source: {}, nuclear {:.1} t",
        FuelKind::FOSSIL
            .iter()
            .map(|fuel| format!(
                "{fuel} {:.1} t",
                grams_to_tonnes(results.fossil_emissions_g[fuel])
            ))
            .join(", "),
        grams_to_tonnes(nuclear_annual_g),
    )?;

    for fuel in FuelKind::FOSSIL {
        let payback = payback_years(
            input.decision.nuclear_construction_emissions_g,
            results.fossil_emissions_g[&fuel],
            nuclear_annual_g,
        );
        match payback {
            Some(years) => writeln!(
                writer,
                "Nuclear construction payback against {fuel}: {years:.1} years"
            )?,
            None => writeln!(
                writer,
                "Nuclear construction payback against {fuel}: never (no annual advantage)"
            )?,
        }
    }

    writer.flush()?;

    Ok(())
}

fn write_day_records(output: &impl Output, results: &YearResults) -> anyhow::Result<()> {
    let writer = output.writer_for_location_key("days.csv")?;
    let mut writer = WriterBuilder::new().from_writer(writer);
    for record in &results.daily {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
