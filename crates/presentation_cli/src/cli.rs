//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use domain::{Theme, UnitSystem};
use infrastructure::AppConfig;

/// Nimbus terminal weather widget
#[derive(Debug, Parser)]
#[command(name = "nimbus")]
#[command(author, version, about = "Current weather and a five-day outlook in your terminal", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./nimbus.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Unit system: metric or imperial
    #[arg(long, global = true)]
    pub units: Option<UnitSystem>,

    /// Theme: light or dark
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Skip the position lookup and go straight to the default place
    #[arg(long, global = true)]
    pub no_geolocation: bool,

    /// IANA zone used to group forecast samples into days
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Commands {
    /// Look up a place by name
    ///
    /// Example: nimbus city New York
    City {
        /// Place name; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Look up by coordinates, falling back to the default place
    ///
    /// Example: nimbus coords --lat 48.85 --lon 2.35
    Coords {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Locate the user (if enabled) or show the default place
    Auto,

    /// Search box: one place per line, `:theme` to switch, `:quit` to leave
    Interactive,
}

impl Cli {
    /// The subcommand to run; `auto` when none was given
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Auto)
    }

    /// Write command-line overrides into loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(units) = self.units {
            config.widget.units = units;
        }
        if let Some(theme) = self.theme {
            config.widget.theme = theme;
        }
        if self.no_geolocation {
            config.widget.enable_geolocation = false;
        }
        if let Some(timezone) = &self.timezone {
            config.widget.timezone.clone_from(timezone);
        }
        if let Some(filter) = log_filter_from_verbosity(self.verbose) {
            config.logging.filter = filter.to_string();
        }
    }
}

/// Log filter for `-v` flags; `None` keeps the configured filter
#[must_use]
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(0), None);
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(255), Some("trace"));
    }

    #[test]
    fn overrides_are_applied() {
        let cli = Cli::try_parse_from([
            "nimbus",
            "--units",
            "imperial",
            "--theme",
            "dark",
            "--no-geolocation",
            "--timezone",
            "Asia/Tokyo",
            "-vv",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.widget.units, UnitSystem::Imperial);
        assert_eq!(config.widget.theme, Theme::Dark);
        assert!(!config.widget.enable_geolocation);
        assert_eq!(config.widget.timezone, "Asia/Tokyo");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let cli = Cli::try_parse_from(["nimbus"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.widget.units, UnitSystem::Metric);
        assert!(config.widget.enable_geolocation);
        assert_eq!(config.logging.filter, "warn");
    }
}
