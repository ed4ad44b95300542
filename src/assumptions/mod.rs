//! Actuarial assumptions: the life table and the assumed lifespan

mod mortality;

pub use mortality::{MortalityTable, CDC_2023, TABLE_LEN};

/// Lifespan added to the date of birth to project the death date
pub const ASSUMED_LIFESPAN_YEARS: u32 = 73;

/// Container for all projection assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub mortality: MortalityTable,
    pub assumed_lifespan_years: u32,
}

impl Assumptions {
    /// CDC 2023 table with the default 73-year lifespan
    pub fn cdc_2023() -> Self {
        Self {
            mortality: MortalityTable::cdc_2023(),
            assumed_lifespan_years: ASSUMED_LIFESPAN_YEARS,
        }
    }

    /// Same table with a different assumed lifespan
    pub fn with_lifespan(assumed_lifespan_years: u32) -> Self {
        Self {
            assumed_lifespan_years,
            ..Self::cdc_2023()
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::cdc_2023()
    }
}
