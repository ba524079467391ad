//! This binary serves the street-cleaning windows as an iCalendar file and as an HTML table.
//!
//! `/` and `/calendar.ics` return the calendar, `/table` the table.
//! Both accept `start_year` and `end_year`, or a single `year`, in the query string.

mod route;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{routing::get, Router};
use clap::Parser;
use dontpark_core::{
    chrono_tz::Tz,
    settings::{parse_timezone, Settings, DEFAULT_MAX_SPAN, DEFAULT_SPAN},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Arguments {
    /// the socket address to listen on
    #[arg(long, env = "DONTPARK_ADDRESS", default_value = "0.0.0.0:8008")]
    pub address: SocketAddr,
    /// the timezone of the cleaning windows
    #[arg(
        long,
        env = "DONTPARK_TIMEZONE",
        default_value = "Europe/Stockholm",
        value_parser = parse_timezone
    )]
    pub timezone: Tz,
    /// years after the current year served when no range is requested
    #[arg(long, env = "DONTPARK_DEFAULT_SPAN", default_value_t = DEFAULT_SPAN)]
    pub default_span: u16,
    /// the longest range a request may ask for, in years after its start
    #[arg(long, env = "DONTPARK_MAX_SPAN", default_value_t = DEFAULT_MAX_SPAN)]
    pub max_span: u16,
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

pub fn app(settings: Settings) -> Router {
    Router::new()
        .route("/", get(route::calendar::handler))
        .route("/calendar.ics", get(route::calendar::handler))
        .route("/table", get(route::table::handler))
        .layer(TraceLayer::new_for_http())
        .with_state(settings)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Arguments::parse();
    let settings = Settings::from(&args);
    tracing::info!(
        address = %args.address,
        timezone = settings.timezone.name(),
        default_span = settings.default_span,
        max_span = settings.max_span,
        "starting server"
    );
    axum::Server::try_bind(&args.address)?
        .serve(app(settings).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_defaults() {
        let args = Arguments::try_parse_from(["dontpark_server"]).unwrap();
        assert_eq!(args.address, SocketAddr::from(([0, 0, 0, 0], 8008)));
        assert_eq!(Settings::from(&args), Settings::default());
    }

    #[test]
    fn test_arguments() {
        let args = Arguments::try_parse_from([
            "dontpark_server",
            "--address",
            "127.0.0.1:3000",
            "--timezone",
            "UTC",
            "--default-span",
            "2",
        ])
        .unwrap();
        let settings = Settings::from(&args);
        assert_eq!(args.address, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(settings.timezone, dontpark_core::chrono_tz::UTC);
        assert_eq!(settings.default_span, 2);
        assert!(
            Arguments::try_parse_from(["dontpark_server", "--timezone", "Nowhere/City"]).is_err()
        );
    }
}
