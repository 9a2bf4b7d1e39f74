//! Galleria core library
//!
//! Domain types, configuration, and the error taxonomy shared by the
//! metastore client, the storage layer, and the API crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, LogLevel};
