//! Terminal view adapter
//!
//! Implements [`WeatherViewPort`] by writing the report as styled text. The
//! view owns its writer and its current theme.

use std::io::{self, Write};

use application::ports::WeatherViewPort;
use application::services::{ForecastDayView, WeatherReportView};
use crossterm::style::{Color, Stylize};
use domain::{Theme, UnitSystem};
use parking_lot::Mutex;
use tracing::warn;

/// Colours for one theme
#[derive(Debug, Clone, Copy)]
struct Palette {
    text: Color,
    accent: Color,
    muted: Color,
    error: Color,
}

impl Palette {
    const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                text: Color::Black,
                accent: Color::DarkBlue,
                muted: Color::DarkGrey,
                error: Color::DarkRed,
            },
            Theme::Dark => Self {
                text: Color::White,
                accent: Color::Cyan,
                muted: Color::Grey,
                error: Color::Red,
            },
        }
    }
}

/// Renders lookups to a terminal (or any writer)
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    out: Mutex<W>,
    theme: Mutex<Theme>,
    units: UnitSystem,
    styled: bool,
}

impl<W: Write> TerminalView<W> {
    /// Create a view; `styled` turns ANSI colours on
    pub fn new(out: W, units: UnitSystem, styled: bool) -> Self {
        Self {
            out: Mutex::new(out),
            theme: Mutex::new(Theme::default()),
            units,
            styled,
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.lock()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    /// Input prompt for the interactive loop
    pub fn show_prompt(&self) {
        let palette = self.palette();
        let prompt = self.paint("search> ", palette.accent, false);
        self.write_with(|out| {
            write!(out, "{prompt}")?;
            out.flush()
        });
    }

    /// A line of help or status text outside any lookup
    pub fn show_notice(&self, message: &str) {
        let line = self.paint(message, self.palette().muted, false);
        self.write_with(|out| writeln!(out, "{line}"));
    }

    fn palette(&self) -> Palette {
        Palette::for_theme(self.theme())
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.styled {
            return text.to_string();
        }
        let styled = text.with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    fn write_with(&self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        let mut out = self.out.lock();
        if let Err(e) = f(&mut out).and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn render(&self, report: &WeatherReportView) -> Vec<String> {
        let palette = self.palette();
        let mut lines = Vec::with_capacity(6 + report.forecast.len());

        lines.push(self.paint(&report.location, palette.accent, true));
        lines.push(format!(
            "  {}  {}",
            self.paint(
                &format!("{}{}", report.temperature, report.temperature_unit),
                palette.text,
                true
            ),
            self.paint(&report.description, palette.text, false),
        ));
        if !report.icon_url.is_empty() {
            lines.push(format!(
                "  {}",
                self.paint(&report.icon_url, palette.muted, false)
            ));
        }
        if !report.feels_like.is_empty() {
            lines.push(format!(
                "  Feels like {}  Humidity {}  Wind {}  Pressure {}",
                report.feels_like, report.humidity, report.wind, report.pressure
            ));
        }

        if !report.forecast.is_empty() {
            lines.push(String::new());
            lines.extend(report.forecast.iter().map(|day| self.render_day(day, palette)));
        }
        lines
    }

    fn render_day(&self, day: &ForecastDayView, palette: Palette) -> String {
        format!(
            "  {:<4} {:>5}  {}",
            self.paint(&day.day, palette.accent, true),
            day.temperature,
            self.paint(&day.icon_alt, palette.muted, false),
        )
    }

    fn write_lines(&self, lines: &[String]) {
        self.write_with(|out| {
            for line in lines {
                writeln!(out, "{line}")?;
            }
            Ok(())
        });
    }
}

impl<W: Write + Send> WeatherViewPort for TerminalView<W> {
    fn show_loading(&self) {
        let lines = self.render(&WeatherReportView::loading(self.units));
        self.write_lines(&lines);
    }

    fn show_report(&self, report: &WeatherReportView) {
        let lines = self.render(report);
        self.write_lines(&lines);
    }

    fn show_error(&self, message: &str) {
        let line = self.paint(message, self.palette().error, true);
        self.write_lines(&[line]);
    }

    fn set_theme(&self, theme: Theme) {
        *self.theme.lock() = theme;
    }
}
