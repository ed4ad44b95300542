//! Death Clock - life-expectancy countdown driven by an actuarial life table
//!
//! This library provides:
//! - The CDC 2023 combined-sex mortality table with clamped lookup
//! - Cumulative death and survival probabilities via the chain rule
//! - A single-point lifespan projection with calendar-aware countdown
//! - Derived life statistics and text rendering

pub mod assumptions;
pub mod display;
pub mod error;
pub mod profile;
pub mod projection;
pub mod stats;

// Re-export commonly used types
pub use assumptions::{Assumptions, MortalityTable, ASSUMED_LIFESPAN_YEARS, CDC_2023};
pub use error::{Error, Result};
pub use profile::Profile;
pub use projection::{Countdown, LifespanRemaining, ProjectionEngine, TimeLeftToday};
pub use stats::LifeStatistics;
