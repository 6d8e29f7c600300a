//! Interactive search loop
//!
//! Each input line is a search. Lines starting with `:` are commands:
//! `:theme [light|dark]`, `:help` and `:quit`.

use std::io::Write;

use application::services::WeatherLookupService;
use domain::Theme;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::view::TerminalView;

const HELP: &str = "Type a place and press Enter. :theme [light|dark] switches colours, :quit exits.";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Search(String),
    /// `:theme` with no argument toggles
    Theme(Option<Theme>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl InputCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(command) = line.strip_prefix(':') else {
            return Self::Search(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q" | "quit" | "exit"), None) => Self::Quit,
            (Some("h" | "help"), None) => Self::Help,
            (Some("theme"), None) => Self::Theme(None),
            (Some("theme"), Some(name)) => name
                .parse()
                .map_or_else(|_| Self::Unknown(line.to_string()), |t| Self::Theme(Some(t))),
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Read lines until `:quit` or end of input
///
/// The initial lookup is expected to have run already.
pub async fn run_interactive<R, W>(
    service: &WeatherLookupService,
    view: &TerminalView<W>,
    input: R,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send,
{
    let mut lines = input.lines();
    view.show_notice(HELP);

    loop {
        view.show_prompt();
        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            return Ok(());
        };

        match InputCommand::parse(&line) {
            InputCommand::Search(place) => {
                let outcome = service.search(&place).await;
                debug!(place = %place, outcome = ?outcome, "Search finished");
            },
            InputCommand::Theme(theme) => {
                let theme = theme.unwrap_or_else(|| view.theme().toggled());
                service.set_theme(theme);
                view.show_notice(&format!("Theme: {theme}"));
            },
            InputCommand::Help => view.show_notice(HELP),
            InputCommand::Quit => return Ok(()),
            InputCommand::Empty => {},
            InputCommand::Unknown(input) => view.show_notice(&format!("Unknown command {input}")),
        }
    }
}
