//! Mortality calculator and countdown projection

mod engine;
mod lifespan;
mod survival;
mod today;

pub use engine::{Countdown, ProjectionEngine};
pub use lifespan::{calendar_difference, projected_death_date, projected_lifespan_remaining, LifespanRemaining};
pub use survival::{cumulative_death_probability, curtate_life_expectancy, survival_probability};
pub use today::{time_remaining_today, TimeLeftToday};
