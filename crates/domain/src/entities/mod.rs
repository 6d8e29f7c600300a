//! Domain entities - weather readings and what is rendered from them

mod conditions;
mod forecast;
mod report;

pub use conditions::CurrentConditions;
pub use forecast::{DailyEntry, DailyForecast, ForecastSample};
pub use report::WeatherReport;
