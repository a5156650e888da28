//! # Access Shared
//!
//! Configuration, telemetry, constants and small helpers shared by the
//! access-control crates.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AccessConfig;
pub use error::AppError;
