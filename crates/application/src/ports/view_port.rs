//! Rendering port
//!
//! The lookup service drives exactly one view. Adapters own their output
//! handles and current theme.

use domain::Theme;
#[cfg(test)]
use mockall::automock;

use crate::services::WeatherReportView;

/// Port for presenting lookup results
#[cfg_attr(test, automock)]
pub trait WeatherViewPort: Send + Sync {
    /// Replace the display with the loading placeholder
    fn show_loading(&self);

    /// Render a finished report
    fn show_report(&self, report: &WeatherReportView);

    /// Render a user-facing error message instead of a report
    fn show_error(&self, message: &str);

    /// Switch the visual theme
    fn set_theme(&self, theme: Theme);
}
