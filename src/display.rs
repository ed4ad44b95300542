//! Text rendering for the countdown and statistics

use crate::projection::Countdown;
use crate::stats::LifeStatistics;

/// Shown in place of the countdown once the death date has passed
pub const EXPIRED_MESSAGE: &str = "Your time has come.";

/// Zero-pad to at least two digits (3 -> "03")
pub fn pad_two(value: u32) -> String {
    format!("{:02}", value)
}

/// Group digits in thousands with commas (1234567 -> "1,234,567")
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// The two countdown lines
pub fn render_countdown(countdown: &Countdown) -> [String; 2] {
    let Some(lifespan) = countdown.lifespan else {
        return [EXPIRED_MESSAGE.to_string(), String::new()];
    };
    let today = countdown.today;

    [
        format!(
            "- {} Years - {} Months - {} Days -",
            pad_two(lifespan.years),
            pad_two(lifespan.months),
            pad_two(lifespan.days)
        ),
        format!(
            "- {} Hours - {} Minutes - {} Seconds -",
            pad_two(today.hours),
            pad_two(today.minutes),
            pad_two(today.seconds)
        ),
    ]
}

/// Statistics panel, one entry per line
pub fn render_statistics(stats: &LifeStatistics) -> Vec<String> {
    let units = &stats.units;
    let outlook = &stats.outlook;

    vec![
        format!("Age: {}", stats.current_age),
        format!("Projected death date: {}", stats.death_date.format("%Y-%m-%d")),
        format!("Life lived: {:.2}%", stats.percent_lived),
        format!("Days left: {}", group_thousands(units.days)),
        format!("Weeks left: {}", group_thousands(units.weeks)),
        format!("Weekends left: {}", group_thousands(units.weekends)),
        format!("Summers left: {}", group_thousands(units.summers)),
        format!("Full moons left: {}", group_thousands(units.full_moons)),
        format!("Books left: {}", group_thousands(units.books)),
        format!("Chance of dying before next birthday: {}", percent(outlook.before_next_birthday)),
        format!("Chance of dying within ten years: {}", percent(outlook.within_decade)),
        format!("Chance of dying before projected age: {}", percent(outlook.before_projected_age)),
        format!("Chance of reaching 100: {}", percent(outlook.reaching_100)),
        format!("Life expectancy: {:.1} years", outlook.life_expectancy),
    ]
}

fn percent(probability: f64) -> String {
    format!("{:.3}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{LifespanRemaining, TimeLeftToday};
    use crate::stats::{LivedUnits, MortalityOutlook};
    use chrono::NaiveDate;

    #[test]
    fn test_pad_two() {
        assert_eq!(pad_two(3), "03");
        assert_eq!(pad_two(0), "00");
        assert_eq!(pad_two(42), "42");
        assert_eq!(pad_two(123), "123");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(100000), "100,000");
    }

    #[test]
    fn test_render_countdown() {
        let countdown = Countdown {
            lifespan: Some(LifespanRemaining { years: 36, months: 7, days: 2 }),
            today: TimeLeftToday { hours: 5, minutes: 0, seconds: 9 },
        };
        let [first, second] = render_countdown(&countdown);
        assert_eq!(first, "- 36 Years - 07 Months - 02 Days -");
        assert_eq!(second, "- 05 Hours - 00 Minutes - 09 Seconds -");
    }

    #[test]
    fn test_render_expired() {
        let countdown = Countdown {
            lifespan: None,
            today: TimeLeftToday { hours: 1, minutes: 2, seconds: 3 },
        };
        assert_eq!(render_countdown(&countdown), [EXPIRED_MESSAGE.to_string(), String::new()]);
    }

    #[test]
    fn test_render_statistics() {
        let stats = LifeStatistics {
            current_age: 36,
            death_date: NaiveDate::from_ymd_opt(2063, 6, 15).unwrap(),
            percent_lived: 49.7812,
            units: LivedUnits { days: 13390, weeks: 1912, weekends: 1912, summers: 36, full_moons: 453, books: 439 },
            outlook: MortalityOutlook {
                before_next_birthday: 0.0017,
                within_decade: 0.025,
                before_projected_age: 0.3,
                reaching_100: 0.0136,
                life_expectancy: 41.26,
            },
        };
        let lines = render_statistics(&stats);

        assert_eq!(lines[1], "Projected death date: 2063-06-15");
        assert_eq!(lines[2], "Life lived: 49.78%");
        assert_eq!(lines[3], "Days left: 13,390");
        assert_eq!(lines[9], "Chance of dying before next birthday: 0.170%");
        assert_eq!(lines[13], "Life expectancy: 41.3 years");
    }
}
