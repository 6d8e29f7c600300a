//! Integration tests for CLI
//!
//! Command parsing, configuration overrides and the interactive loop
//! driven over in-memory input.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use clap::Parser;
use domain::{CurrentConditions, ForecastSample, LocationQuery, Theme, UnitSystem};
use infrastructure::{AppConfig, DisabledGeolocation, WidgetOptions};
use parking_lot::Mutex;
use presentation_cli::{Cli, Commands, TerminalView, run_interactive};

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

// ============================================================================
// Argument Parsing
// ============================================================================

#[test]
fn cli_defaults_to_auto() {
    let cli = parse_args(&["nimbus"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.command(), Commands::Auto);
}

#[test]
fn cli_parses_city_command() {
    let cli = parse_args(&["nimbus", "city", "Paris"]).unwrap();
    if let Commands::City { name } = cli.command() {
        assert_eq!(name, vec!["Paris".to_string()]);
    } else {
        panic!("Expected City command");
    }
}

#[test]
fn cli_city_handles_multiword_name() {
    let cli = parse_args(&["nimbus", "city", "Rio", "de", "Janeiro"]).unwrap();
    if let Commands::City { name } = cli.command() {
        assert_eq!(name.join(" "), "Rio de Janeiro");
    } else {
        panic!("Expected City command");
    }
}

#[test]
fn cli_city_requires_name() {
    assert!(parse_args(&["nimbus", "city"]).is_err());
}

#[test]
fn cli_parses_negative_coordinates() {
    let cli = parse_args(&["nimbus", "coords", "--lat", "-33.87", "--lon", "151.21"]).unwrap();
    if let Commands::Coords { lat, lon } = cli.command() {
        assert!((lat + 33.87).abs() < f64::EPSILON);
        assert!((lon - 151.21).abs() < f64::EPSILON);
    } else {
        panic!("Expected Coords command");
    }
}

#[test]
fn cli_coords_requires_both_values() {
    assert!(parse_args(&["nimbus", "coords", "--lat", "10"]).is_err());
}

#[test]
fn cli_parses_interactive_command() {
    let cli = parse_args(&["nimbus", "interactive"]).unwrap();
    assert_eq!(cli.command(), Commands::Interactive);
}

#[test]
fn cli_parses_global_flags_after_subcommand() {
    let cli = parse_args(&[
        "nimbus",
        "city",
        "Denver",
        "--units",
        "imperial",
        "--theme",
        "dark",
        "--no-geolocation",
    ])
    .unwrap();
    assert_eq!(cli.units, Some(UnitSystem::Imperial));
    assert_eq!(cli.theme, Some(Theme::Dark));
    assert!(cli.no_geolocation);
}

#[test]
fn cli_rejects_unknown_units() {
    assert!(parse_args(&["nimbus", "--units", "kelvin"]).is_err());
}

#[test]
fn cli_parses_multiple_verbose_flags() {
    let cli = parse_args(&["nimbus", "-vvv", "auto"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_verbosity_zero_by_default() {
    let cli = parse_args(&["nimbus", "auto"]).unwrap();
    assert_eq!(cli.verbose, 0);
}

// ============================================================================
// Configuration Overrides
// ============================================================================

#[test]
fn config_file_and_flags_combine() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        "[weather]\napi_key = \"k\"\n\n[widget]\ndefault_city = \"Oslo\"\nunits = \"metric\""
    )
    .unwrap();
    let path = file.path().to_string_lossy().to_string();

    let cli = parse_args(&["nimbus", "--config", &path, "--units", "imperial"]).unwrap();
    let mut config = AppConfig::load(cli.config.as_deref()).unwrap();
    cli.apply_overrides(&mut config);

    assert_eq!(config.widget.default_city, "Oslo");
    assert_eq!(config.widget.units, UnitSystem::Imperial);
}

#[test]
fn bad_timezone_override_is_caught_when_building_options() {
    let cli = parse_args(&["nimbus", "--timezone", "Atlantis/Capital"]).unwrap();
    let mut config = AppConfig::default();
    cli.apply_overrides(&mut config);
    assert!(WidgetOptions::from_config(&config).is_err());
}

// ============================================================================
// Interactive Loop
// ============================================================================

/// Every place is unknown
struct NowhereWeather {
    queries: Mutex<Vec<String>>,
}

#[async_trait]
impl WeatherPort for NowhereWeather {
    async fn current_conditions(
        &self,
        query: &LocationQuery,
        _units: UnitSystem,
    ) -> Result<CurrentConditions, ApplicationError> {
        self.queries.lock().push(query.to_string());
        Err(ApplicationError::NotFound(query.to_string()))
    }

    async fn forecast_samples(
        &self,
        query: &LocationQuery,
        _units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        Err(ApplicationError::NotFound(query.to_string()))
    }
}

#[tokio::test]
async fn interactive_loop_searches_and_switches_theme() {
    let weather = Arc::new(NowhereWeather {
        queries: Mutex::new(Vec::new()),
    });
    let view = Arc::new(TerminalView::new(Vec::new(), UnitSystem::Metric, false));
    let service = WidgetOptions::builder().build_with(
        weather.clone(),
        view.clone(),
        Arc::new(DisabledGeolocation),
    );

    let input: &[u8] = b"Atlantis\n\n:theme\n:theme light\n:bogus\n:quit\nNever reached\n";
    run_interactive(&service, view.as_ref(), input).await.unwrap();

    assert_eq!(*weather.queries.lock(), vec!["Atlantis".to_string()]);
    assert_eq!(view.theme(), Theme::Light);

    drop(service);
    let view = Arc::try_unwrap(view).unwrap_or_else(|_| panic!("view still shared"));
    let text = String::from_utf8(view.into_inner()).unwrap();
    assert!(text.contains("City not found. Please try again."));
    assert!(text.contains("Theme: dark"));
    assert!(text.contains("Theme: light"));
    assert!(text.contains("Unknown command :bogus"));
}

#[tokio::test]
async fn interactive_loop_ends_at_end_of_input() {
    let weather = Arc::new(NowhereWeather {
        queries: Mutex::new(Vec::new()),
    });
    let view = Arc::new(TerminalView::new(Vec::new(), UnitSystem::Metric, false));
    let service = WidgetOptions::builder().build_with(
        weather.clone(),
        view.clone(),
        Arc::new(DisabledGeolocation),
    );

    // input arrives in pieces and closes without a trailing newline
    let input = tokio_test::io::Builder::new()
        .read(b"Ly")
        .read(b"on")
        .build();
    run_interactive(&service, view.as_ref(), tokio::io::BufReader::new(input))
        .await
        .unwrap();
    assert_eq!(*weather.queries.lock(), vec!["Lyon".to_string()]);
}
