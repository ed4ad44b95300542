//! Write the life table with derived survival figures to CSV
//!
//! One row per age from 0 to 100. Output path is the first argument or
//! `life_table.csv`.

use anyhow::Context;
use death_clock::projection::{cumulative_death_probability, curtate_life_expectancy, survival_probability};
use death_clock::{MortalityTable, ASSUMED_LIFESPAN_YEARS, CDC_2023};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::time::Instant;

const DEFAULT_OUTPUT_PATH: &str = "life_table.csv";

#[derive(Debug, Serialize)]
struct LifeTableRow {
    #[serde(rename = "Age")]
    age: i32,
    #[serde(rename = "qx")]
    qx: f64,
    #[serde(rename = "px")]
    px: f64,
    /// Survivors per 100,000 births
    #[serde(rename = "lx")]
    lx: f64,
    #[serde(rename = "ex")]
    ex: f64,
    #[serde(rename = "DeathBeforeProjectedAge")]
    death_before_projected_age: f64,
    #[serde(rename = "Reach100")]
    reach_100: f64,
}

fn build_row(table: &MortalityTable, age: i32) -> LifeTableRow {
    let projected_age = ASSUMED_LIFESPAN_YEARS as i32;
    LifeTableRow {
        age,
        qx: table.annual_death_probability(age),
        px: table.annual_survival_probability(age),
        lx: 100_000.0 * survival_probability(table, 0, age),
        ex: curtate_life_expectancy(table, age),
        death_before_projected_age: cumulative_death_probability(table, age, projected_age),
        reach_100: survival_probability(table, age, 100),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
    let start = Instant::now();

    let table = &CDC_2023;
    let rows: Vec<LifeTableRow> = (0..=table.max_age())
        .into_par_iter()
        .map(|age| build_row(table, age))
        .collect();
    log::debug!("built {} rows in {:?}", rows.len(), start.elapsed());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Life table written to {} ({} ages)", output_path, rows.len());
    println!(
        "  e0 = {:.2} years, chance of dying before {} = {:.2}%",
        rows[0].ex,
        ASSUMED_LIFESPAN_YEARS,
        rows[0].death_before_projected_age * 100.0
    );

    Ok(())
}
