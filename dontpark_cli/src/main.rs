//! This binary writes the street-cleaning windows of a range of years to a file.

use std::{
    env::current_dir,
    fs::write,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use dontpark_core::{
    calendar,
    chrono_tz::Tz,
    ical::generator::Emitter,
    schedule,
    settings::{parse_timezone, Settings, DEFAULT_SPAN},
    table,
    year_range::{current_year, parse_year, YearParams, YearRange},
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// an iCalendar file
    Ics,
    /// an HTML page with one table row per month
    Html,
}

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Arguments {
    /// the first year, used together with `--end-year`
    #[arg(long)]
    pub start_year: Option<String>,
    /// the last year, used together with `--start-year`
    #[arg(long)]
    pub end_year: Option<String>,
    /// a single year
    #[arg(long)]
    pub year: Option<String>,
    /// the timezone of the cleaning windows
    #[arg(
        long,
        env = "DONTPARK_TIMEZONE",
        default_value = "Europe/Stockholm",
        value_parser = parse_timezone
    )]
    pub timezone: Tz,
    /// years after the current year written when no range is given
    #[arg(long, default_value_t = DEFAULT_SPAN)]
    pub default_span: u16,
    /// the longest range accepted, in years after `--start-year`
    #[arg(long, default_value_t = u16::MAX)]
    pub max_span: u16,
    /// the output format
    #[arg(long, value_enum, default_value_t = Format::Ics)]
    pub format: Format,
    /// the output file, defaults to `calendar.ics` or `calendar.html` in the current directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl From<&Arguments> for Settings {
    fn from(value: &Arguments) -> Self {
        Settings {
            timezone: value.timezone,
            default_span: value.default_span,
            max_span: value.max_span,
        }
    }
}

impl Arguments {
    fn year_range(&self, settings: &Settings) -> YearRange {
        let year_params = YearParams {
            start_year: self.start_year.as_deref(),
            end_year: self.end_year.as_deref(),
            year: self.year.as_deref(),
        };
        let range =
            YearRange::resolve(&year_params, current_year(settings.timezone), settings);
        if let (Some(start_year), Some(end_year)) = (&self.start_year, &self.end_year) {
            let requested = (parse_year(start_year), parse_year(end_year));
            if requested != (Some(range.start()), Some(range.end())) {
                tracing::warn!(
                    start_year = start_year.as_str(),
                    end_year = end_year.as_str(),
                    used_start_year = range.start(),
                    used_end_year = range.end(),
                    "requested range is not usable, falling back"
                );
            }
        }
        range
    }

    fn output(&self) -> Result<PathBuf> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }
        let mut path = current_dir()?;
        path.push(match self.format {
            Format::Ics => calendar::FILE_NAME,
            Format::Html => table::FILE_NAME,
        });
        Ok(path)
    }
}

/// Write the requested file to `path`, returning the number of events in it.
fn run(args: &Arguments, path: &Path) -> Result<usize> {
    let settings = Settings::from(args);
    let range = args.year_range(&settings);
    let events = schedule::generate(&range);
    tracing::debug!(
        start_year = range.start(),
        end_year = range.end(),
        "generated events"
    );
    let content = match args.format {
        Format::Ics => calendar::build(&events, &settings, chrono::Utc::now()).generate(),
        Format::Html => table::render(&range, &events, &settings),
    };
    write(path, content)?;
    Ok(events.len())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Arguments::parse();
    let path = args.output()?;
    let events = run(&args, &path)?;
    tracing::info!(path = %path.display(), events, "calendar written");
    Ok(())
}
