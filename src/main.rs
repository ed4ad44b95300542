//! Death Clock CLI
//!
//! Renders the countdown to the projected death date. The date of birth
//! comes from `--dob` or the DEATH_CLOCK_DOB environment variable.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Local};
use clap::Parser;
use serde::Serialize;

use death_clock::display::{render_countdown, render_statistics};
use death_clock::profile::parse_now;
use death_clock::{
    Assumptions, Countdown, Error, LifeStatistics, Profile, ProjectionEngine, ASSUMED_LIFESPAN_YEARS,
};

const SETUP_PROMPT: &str = "No date of birth set. Pass --dob YYYY-MM-DD or set DEATH_CLOCK_DOB.";

#[derive(Debug, Parser)]
#[command(name = "death_clock", version, about = "Countdown to your statistically estimated death date")]
struct Args {
    /// Date of birth (YYYY-MM-DD)
    #[arg(long, env = "DEATH_CLOCK_DOB")]
    dob: Option<String>,

    /// Assumed total lifespan in years
    #[arg(long, env = "DEATH_CLOCK_LIFESPAN", default_value_t = ASSUMED_LIFESPAN_YEARS)]
    lifespan: u32,

    /// Evaluate at this instant instead of the wall clock
    #[arg(long)]
    now: Option<String>,

    /// Print life statistics below the countdown
    #[arg(long)]
    stats: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Refresh once per second until interrupted
    #[arg(long, conflicts_with_all = ["now", "json"])]
    watch: bool,
}

#[derive(Serialize)]
struct Report {
    date_of_birth: chrono::NaiveDate,
    countdown: Countdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<LifeStatistics>,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();

    let profile = match Profile::parse(args.dob.as_deref().unwrap_or_default()) {
        Ok(profile) => profile,
        Err(Error::MissingDateOfBirth) => {
            eprintln!("{}", SETUP_PROMPT);
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err).context("reading date of birth"),
    };

    let engine = ProjectionEngine::new(Assumptions::with_lifespan(args.lifespan));
    log::debug!(
        "date of birth {}, projected death date {}",
        profile.date_of_birth,
        engine.death_date(profile.date_of_birth)
    );

    if args.watch {
        watch(&engine, &profile, args.stats);
    }

    let now = match args.now.as_deref() {
        Some(raw) => parse_now(raw).context("reading --now")?,
        None => Local::now().fixed_offset(),
    };

    if args.json {
        let report = Report {
            date_of_birth: profile.date_of_birth,
            countdown: engine.countdown(profile.date_of_birth, &now),
            statistics: args.stats.then(|| engine.statistics(profile.date_of_birth, &now)),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_snapshot(&engine, &profile, &now, args.stats);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_snapshot(engine: &ProjectionEngine, profile: &Profile, now: &DateTime<FixedOffset>, with_stats: bool) {
    for line in render_countdown(&engine.countdown(profile.date_of_birth, now)) {
        println!("{}", line);
    }
    if with_stats {
        println!();
        for line in render_statistics(&engine.statistics(profile.date_of_birth, now)) {
            println!("{}", line);
        }
    }
}

fn watch(engine: &ProjectionEngine, profile: &Profile, with_stats: bool) -> ! {
    loop {
        // Clear screen and home the cursor
        print!("\x1b[2J\x1b[H");
        print_snapshot(engine, profile, &Local::now().fixed_offset(), with_stats);
        thread::sleep(Duration::from_secs(1));
    }
}
