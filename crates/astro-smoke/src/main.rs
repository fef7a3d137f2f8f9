use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use astro_core::{clock_time, BirthRecord, Language, ZodiacSign};
use astro_oracle::OracleClient;

#[derive(Parser)]
#[command(
    name = "astro-smoke",
    about = "Exercise the generation client against the configured model"
)]
struct Cli {
    /// Output language tag, e.g. "en" or "th"
    #[arg(long, global = true, default_value = "en")]
    lang: String,

    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Check that a trivial prompt round-trips
    Probe,
    /// Daily reading for one sign
    Reading {
        #[arg(long)]
        sign: ZodiacSign,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Birth chart for one person
    Chart(Person),
    /// Compatibility between two people
    Compatibility {
        #[arg(long)]
        a_name: String,
        #[arg(long)]
        a_date: NaiveDate,
        #[arg(long, value_parser = parse_clock)]
        a_time: NaiveTime,
        #[arg(long)]
        a_location: String,
        #[arg(long)]
        b_name: String,
        #[arg(long)]
        b_date: NaiveDate,
        #[arg(long, value_parser = parse_clock)]
        b_time: NaiveTime,
        #[arg(long)]
        b_location: String,
    },
    /// Calendar (panchang) data for a date and place
    Calendar {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        location: String,
    },
    /// Run one sample request of every kind
    All,
}

#[derive(Args)]
struct Person {
    #[arg(long)]
    name: String,
    #[arg(long)]
    date: NaiveDate,
    #[arg(long, value_parser = parse_clock)]
    time: NaiveTime,
    #[arg(long)]
    location: String,
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    latitude: Option<f64>,
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    longitude: Option<f64>,
}

impl Person {
    fn into_record(self) -> BirthRecord {
        let record = BirthRecord::new(self.name, self.date, self.time, self.location);
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => record.with_coordinates(lat, lon),
            _ => record,
        }
    }
}

fn parse_clock(raw: &str) -> Result<NaiveTime, String> {
    clock_time::parse(raw).map_err(|e| format!("expected HH:MM: {e}"))
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn record(
    name: &str,
    date: (i32, u32, u32),
    time: (u32, u32),
    location: &str,
) -> Result<BirthRecord> {
    let date =
        NaiveDate::from_ymd_opt(date.0, date.1, date.2).context("invalid sample date")?;
    let time = NaiveTime::from_hms_opt(time.0, time.1, 0).context("invalid sample time")?;
    Ok(BirthRecord::new(name, date, time, location))
}

/// The sample requests: one of each content type.
async fn run_all(client: &OracleClient, lang: Language) -> Result<()> {
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).context("invalid sample date")?;
    let mut failures = 0;

    match client.generate_reading(ZodiacSign::Aries, day, lang).await {
        Ok(r) => info!(sign = %r.sign, overall = r.overall, "daily reading ok"),
        Err(e) => {
            error!("daily reading failed: {e}");
            failures += 1;
        }
    }

    let john = record("John Doe", (1990, 1, 1), (12, 0), "New York, NY, USA")?;
    match client.generate_chart(&john, lang).await {
        Ok(c) => info!(name = %c.birth_data.name, planets = c.planets.len(), "birth chart ok"),
        Err(e) => {
            error!("birth chart failed: {e}");
            failures += 1;
        }
    }

    let alice = record("Alice", (1990, 3, 21), (10, 30), "Los Angeles, CA, USA")?;
    let bob = record("Bob", (1992, 7, 15), (14, 45), "Chicago, IL, USA")?;
    match client.generate_compatibility(&alice, &bob, lang).await {
        Ok(c) => info!(overall = c.overall, "compatibility ok"),
        Err(e) => {
            error!("compatibility failed: {e}");
            failures += 1;
        }
    }

    match client
        .generate_calendar_info(day, "New Delhi, India", lang)
        .await
    {
        Ok(c) => info!(date = %c.date, periods = c.auspicious_periods.len(), "calendar ok"),
        Err(e) => {
            error!("calendar failed: {e}");
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of 4 sample requests failed");
    }
    info!("all sample requests passed");
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let lang = Language::from_tag(&cli.lang);
    let settings = astro_core::read_settings().with_env();
    let client = OracleClient::from_settings(&settings);

    match cli.task {
        Task::Probe => {
            if !client.probe().await {
                bail!("model connection failed; check the API key and provider settings");
            }
            println!("ok ({} / {})", settings.provider, settings.model);
            Ok(())
        }
        Task::Reading { sign, date } => emit(&client.generate_reading(sign, date, lang).await?),
        Task::Chart(person) => emit(&client.generate_chart(&person.into_record(), lang).await?),
        Task::Compatibility {
            a_name,
            a_date,
            a_time,
            a_location,
            b_name,
            b_date,
            b_time,
            b_location,
        } => {
            let a = BirthRecord::new(a_name, a_date, a_time, a_location);
            let b = BirthRecord::new(b_name, b_date, b_time, b_location);
            emit(&client.generate_compatibility(&a, &b, lang).await?)
        }
        Task::Calendar { date, location } => {
            emit(&client.generate_calendar_info(date, &location, lang).await?)
        }
        Task::All => run_all(&client, lang).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse()).await
}
