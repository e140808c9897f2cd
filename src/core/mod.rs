//! Core building blocks: errors, configuration, build profiles and naming helpers

pub mod config;
pub mod error;
pub mod profile;
pub mod utils;

pub use config::FormulaConfig;
pub use error::{Error, Result};
pub use profile::BuildProfile;
