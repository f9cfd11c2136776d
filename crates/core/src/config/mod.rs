//! Configuration loading and schema definitions
//!
//! TOML-backed configuration whose defaults reproduce the stock MeTube
//! project layout, so running without a config file needs no setup.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
