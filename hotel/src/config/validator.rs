//! Configuration validation.

use std::collections::HashSet;

use crate::config::schema::{Config, RoomConfig};
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::room::Room;

/// Validates configuration values and their combinations.
///
/// # Examples
///
/// ```
/// use hotel::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
///
/// let bad = Config { max_block_size: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref rooms) = config.rooms {
            Self::validate_rooms(rooms)?;
        }

        if config.max_block_size == Some(0) {
            return Err(Error::Validation {
                field: "max_block_size".into(),
                message: "must be at least 1".into(),
            });
        }

        if let Some(ref level) = config.log_level {
            LogLevel::parse(level).map_err(|message| Error::Validation {
                field: "log_level".into(),
                message,
            })?;
        }

        Ok(())
    }

    fn validate_rooms(rooms: &RoomConfig) -> Result<()> {
        if rooms.count.is_some() && rooms.ids.is_some() {
            return Err(Error::Validation {
                field: "rooms".into(),
                message: "cannot specify both count and ids".into(),
            });
        }

        if rooms.count == Some(0) {
            return Err(Error::Validation {
                field: "rooms.count".into(),
                message: "must be at least 1".into(),
            });
        }

        if let Some(ref ids) = rooms.ids {
            Self::validate_room_ids(ids)?;
        }

        Ok(())
    }

    fn validate_room_ids(ids: &[u16]) -> Result<()> {
        if ids.is_empty() {
            return Err(Error::Validation {
                field: "rooms.ids".into(),
                message: "must list at least one room".into(),
            });
        }

        let mut seen = HashSet::with_capacity(ids.len());
        for &id in ids {
            Room::try_from(id).map_err(|e| Error::Validation {
                field: "rooms.ids".into(),
                message: e.to_string(),
            })?;

            if !seen.insert(id) {
                return Err(Error::Validation {
                    field: "rooms.ids".into(),
                    message: format!("duplicate room number {id}"),
                });
            }
        }

        Ok(())
    }
}
