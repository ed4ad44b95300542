//! Survival and cumulative mortality over whole years of age
//!
//! Piecewise-annual hazard: q(x) is constant within each year of age and
//! successive years are conditionally independent, so
//!
//! ```text
//! ₜpₓ = ∏(a=x to x+t-1) (1 - q(a))
//! ₜqₓ = 1 - ₜpₓ
//! ```

use crate::assumptions::MortalityTable;

/// Probability of surviving from `current_age` to `target_age`
///
/// An empty interval (`target_age <= current_age`) is survived with
/// certainty. Years before birth carry no mortality, and every year past the
/// end of the table repeats the last rate, so that tail is folded into one
/// `powf` and the loop never runs more than the table length.
pub fn survival_probability(table: &MortalityTable, current_age: i32, target_age: i32) -> f64 {
    if target_age <= current_age {
        return 1.0;
    }

    let start = current_age.max(0);
    let tail_start = table.max_age() + 1;
    let end = target_age.min(tail_start);

    let mut survival = 1.0;
    for age in start..end {
        survival *= table.annual_survival_probability(age);
    }

    let tail_years = i64::from(target_age) - i64::from(start.max(tail_start));
    if tail_years > 0 {
        survival *= table
            .annual_survival_probability(tail_start)
            .powf(tail_years as f64);
    }

    survival
}

/// Probability of dying before `target_age` given survival to `current_age`
///
/// Exactly zero when `target_age <= current_age`.
pub fn cumulative_death_probability(table: &MortalityTable, current_age: i32, target_age: i32) -> f64 {
    if target_age <= current_age {
        return 0.0;
    }
    1.0 - survival_probability(table, current_age, target_age)
}

/// Curtate expectation of life eₓ = Σ(k≥1) ₖpₓ
///
/// Past the table the survival factor is constant, so the remaining
/// geometric series is summed in closed form.
pub fn curtate_life_expectancy(table: &MortalityTable, age: i32) -> f64 {
    let max_age = table.max_age();
    let tail_p = table.annual_survival_probability(max_age);

    let mut expectancy = if age < 0 { -f64::from(age) } else { 0.0 };
    let mut survival = 1.0;
    for a in age.max(0)..max_age {
        survival *= table.annual_survival_probability(a);
        expectancy += survival;
    }

    expectancy + survival * tail_p / (1.0 - tail_p)
}
