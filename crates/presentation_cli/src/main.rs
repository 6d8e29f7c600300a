//! Nimbus CLI
//!
//! Terminal weather widget: current conditions plus a five-day outlook.

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::ports::GeolocationPort;
use application::services::LookupOutcome;
use clap::Parser;
use domain::GeoLocation;
use infrastructure::{AppConfig, DisabledGeolocation, WidgetOptions, geolocation_from_config, init_logging};
use presentation_cli::{Cli, Commands, TerminalView, run_interactive};
use tokio::io::BufReader;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    init_logging(&config.logging)?;

    let options = WidgetOptions::from_config(&config)?;

    let geolocation: Arc<dyn GeolocationPort> = if config.widget.enable_geolocation {
        geolocation_from_config(&config.geolocation)?
    } else {
        Arc::new(DisabledGeolocation)
    };

    let stdout = std::io::stdout();
    let styled = stdout.is_terminal();
    let view = Arc::new(TerminalView::new(stdout, options.selected_units(), styled));
    let service = options.build(view.clone(), geolocation)?;

    let command = cli.command();
    info!(command = ?command, "Starting lookup");

    let outcome = match command {
        Commands::City { name } => service.search(&name.join(" ")).await,
        Commands::Coords { lat, lon } => {
            let location = GeoLocation::new(lat, lon)?;
            service.lookup_coordinates(location).await
        },
        Commands::Auto => service.load_initial().await,
        Commands::Interactive => {
            service.load_initial().await;
            run_interactive(&service, view.as_ref(), BufReader::new(tokio::io::stdin())).await?;
            LookupOutcome::Rendered
        },
    };

    debug!(outcome = ?outcome, "Done");
    Ok(match outcome {
        LookupOutcome::Failed(_) => ExitCode::FAILURE,
        LookupOutcome::Rendered | LookupOutcome::Superseded | LookupOutcome::Skipped => {
            ExitCode::SUCCESS
        },
    })
}
