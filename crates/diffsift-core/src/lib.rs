//! Core configuration and utilities shared by the diffsift crates
//!
//! ## Modules
//!
//! - `config`: Layered TOML configuration
//! - `logging`: Tracing subscriber setup
//! - `error`: Error type for the above

pub mod config;
pub mod error;
pub mod logging;

pub use config::{get_config_home, CleanConfig, Config, LogConfig};
pub use error::{CoreError, CoreResult};
