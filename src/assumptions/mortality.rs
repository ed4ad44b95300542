//! Annual death probabilities from the CDC 2023 United States life table
//!
//! Both sexes combined. Values at 5-year intervals are the published
//! Table 1 figures; the years in between are interpolated and baked into
//! the literal data, so lookups never interpolate.

/// Number of ages covered by the table (0 through 100 inclusive)
pub const TABLE_LEN: usize = 101;

/// q(x) by age, index = age in whole years
const CDC_2023_BOTH_SEXES: [f64; TABLE_LEN] = [
    // Age 0-9
    0.005574, 0.000392, 0.000350, 0.000300, 0.000220,
    0.000155, 0.000143, 0.000132, 0.000120, 0.000108,
    // Age 10-19
    0.000097, 0.000110, 0.000130, 0.000160, 0.000220,
    0.000300, 0.000370, 0.000440, 0.000510, 0.000590,
    // Age 20-29
    0.000679, 0.000730, 0.000770, 0.000820, 0.000900,
    0.000995, 0.001030, 0.001060, 0.001100, 0.001180,
    // Age 30-39
    0.001275, 0.001310, 0.001350, 0.001390, 0.001490,
    0.001601, 0.001700, 0.001810, 0.001930, 0.002050,
    // Age 40-49
    0.002166, 0.002360, 0.002550, 0.002750, 0.002960,
    0.003180, 0.003500, 0.003830, 0.004170, 0.004540,
    // Age 50-59
    0.004944, 0.005440, 0.005980, 0.006570, 0.007030,
    0.007559, 0.008280, 0.009040, 0.009850, 0.010520,
    // Age 60-69
    0.011246, 0.012100, 0.013020, 0.013990, 0.014950,
    0.015949, 0.017400, 0.018950, 0.020600, 0.021900,
    // Age 70-79
    0.023247, 0.025500, 0.027900, 0.029800, 0.032100,
    0.034789, 0.038600, 0.042200, 0.046100, 0.050000,
    // Age 80-89
    0.054366, 0.061000, 0.068000, 0.075500, 0.082500,
    0.089851, 0.101000, 0.113000, 0.126000, 0.137500,
    // Age 90-99
    0.149174, 0.166000, 0.183000, 0.201000, 0.219000,
    0.236687, 0.260000, 0.285000, 0.310000, 0.332000,
    // Age 100
    0.354054,
];

/// Process-wide CDC 2023 table
pub static CDC_2023: MortalityTable = MortalityTable::cdc_2023();

/// Immutable age-indexed table of annual death probabilities
#[derive(Debug, Clone, PartialEq)]
pub struct MortalityTable {
    /// Annual death probability by age (index = age)
    rates: [f64; TABLE_LEN],
}

impl MortalityTable {
    /// CDC 2023 combined-sex table
    pub const fn cdc_2023() -> Self {
        Self {
            rates: CDC_2023_BOTH_SEXES,
        }
    }

    /// Annual probability of dying for a given age
    ///
    /// Negative ages have no mortality. Ages past the end of the table use
    /// the age-100 rate.
    pub fn annual_death_probability(&self, age: i32) -> f64 {
        if age < 0 {
            return 0.0;
        }
        let idx = age as usize;
        if idx >= self.rates.len() {
            return self.rates[self.rates.len() - 1];
        }
        self.rates[idx]
    }

    /// Annual survival probability p(x) = 1 - q(x)
    pub fn annual_survival_probability(&self, age: i32) -> f64 {
        1.0 - self.annual_death_probability(age)
    }

    /// Highest age with its own entry
    pub fn max_age(&self) -> i32 {
        (self.rates.len() - 1) as i32
    }

    /// Raw rates in age order
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }
}

impl Default for MortalityTable {
    fn default() -> Self {
        Self::cdc_2023()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_values() {
        let table = MortalityTable::cdc_2023();

        assert_eq!(table.annual_death_probability(0), 0.005574);
        assert_eq!(table.annual_death_probability(65), 0.015949);
        assert_eq!(table.annual_death_probability(100), 0.354054);
        // Interpolated entry
        assert_eq!(table.annual_death_probability(3), 0.000300);
    }

    #[test]
    fn test_negative_age_has_no_mortality() {
        let table = MortalityTable::cdc_2023();
        assert_eq!(table.annual_death_probability(-5), 0.0);
        assert_eq!(table.annual_death_probability(i32::MIN), 0.0);
        assert_eq!(table.annual_survival_probability(-1), 1.0);
    }

    #[test]
    fn test_clamps_past_table_end() {
        let table = MortalityTable::cdc_2023();
        let last = table.annual_death_probability(100);

        assert_eq!(table.annual_death_probability(101), last);
        assert_eq!(table.annual_death_probability(150), last);
        assert_eq!(table.annual_death_probability(i32::MAX), last);
    }

    #[test]
    fn test_table_shape() {
        let table = &CDC_2023;
        assert_eq!(table.rates().len(), TABLE_LEN);
        assert_eq!(table.max_age(), 100);
        assert!(table.rates().iter().all(|q| (0.0..=1.0).contains(q)));
    }

    #[test]
    fn test_not_strictly_monotonic() {
        // Infant mortality exceeds every childhood rate
        let table = MortalityTable::default();
        assert!(table.annual_death_probability(0) > table.annual_death_probability(10));
        assert!(table.annual_death_probability(10) < table.annual_death_probability(11));
    }
}
