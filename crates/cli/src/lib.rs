//! Command-line driver around the inventory rules: load or seed an inventory,
//! advance it, and export the result.

pub mod config;
pub mod export;
pub mod run;
pub mod seed;

pub use config::{Config, ConfigError};
pub use run::run;
