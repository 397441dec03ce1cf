//! Environment variable handling for configuration overrides.
//!
//! `HOTEL_*` variables override file-based configuration.

use std::env;

use crate::config::schema::{Config, RoomConfig};
use crate::error::{Error, Result};
use crate::logging::LOG_MODE_ENV;

/// Number of rooms, numbered from 1.
pub const ROOM_COUNT_ENV: &str = "HOTEL_ROOM_COUNT";

/// Comma-separated explicit room numbers.
pub const ROOM_IDS_ENV: &str = "HOTEL_ROOM_IDS";

/// Largest block size.
pub const MAX_BLOCK_SIZE_ENV: &str = "HOTEL_MAX_BLOCK_SIZE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use hotel::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Setting either room variable replaces the whole room configuration.
    /// Setting both produces a room configuration the validator rejects.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an unparseable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_room_overrides(config)?;

        if let Ok(size) = env::var(MAX_BLOCK_SIZE_ENV) {
            config.max_block_size = Some(size.trim().parse().map_err(|_| Error::Validation {
                field: MAX_BLOCK_SIZE_ENV.into(),
                message: format!("must be an integer between 1 and 255, got '{size}'"),
            })?);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_level = Some(mode);
        }

        Ok(())
    }

    fn apply_room_overrides(config: &mut Config) -> Result<()> {
        let count: Option<u16> = match env::var(ROOM_COUNT_ENV) {
            Ok(value) => Some(value.trim().parse().map_err(|_| Error::Validation {
                field: ROOM_COUNT_ENV.into(),
                message: format!("invalid room count: '{value}'"),
            })?),
            Err(_) => None,
        };

        let ids = match env::var(ROOM_IDS_ENV) {
            Ok(value) => Some(Self::parse_room_ids(&value)?),
            Err(_) => None,
        };

        if count.is_some() || ids.is_some() {
            config.rooms = Some(RoomConfig { count, ids });
        }

        Ok(())
    }

    /// Parse room numbers from a comma-separated string.
    ///
    /// Blank entries are skipped.
    fn parse_room_ids(s: &str) -> Result<Vec<u16>> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse().map_err(|_| Error::Validation {
                    field: ROOM_IDS_ENV.into(),
                    message: format!("invalid room number: {part}"),
                })
            })
            .collect()
    }
}
