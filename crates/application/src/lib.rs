//! Application layer - Use cases and orchestration
//!
//! Contains the weather lookup use case, the view-model presenter and the
//! port definitions adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, LookupError};
pub use ports::*;
pub use services::*;
