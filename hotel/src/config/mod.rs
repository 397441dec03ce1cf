//! Configuration system for the hotel.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `hotel.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HOTEL_*`)
//! 3. Project config (`hotel.yaml`, nearest ancestor of the working directory)
//! 4. User config (`~/.hotel/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use hotel::config::ConfigBuilder;
//! use hotel::Registry;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/srv/hotel"))
//!     .build()
//!     .unwrap();
//! let registry = Registry::from_config(&config).unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use hotel::config::{Config, ConfigBuilder, RoomConfig};
//!
//! let custom = Config {
//!     rooms: Some(RoomConfig { count: None, ids: Some(vec![101, 102, 201]) }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.rooms.unwrap().inventory().unwrap().len(), 3);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, RoomConfig};
pub use validator::ConfigValidator;
