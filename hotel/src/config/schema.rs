//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the hotel: the room
//! inventory, the block size limit and the log level.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::registry::DEFAULT_MAX_BLOCK_SIZE;
use crate::room::RoomInventory;

/// Complete configuration structure.
///
/// Every field is optional so partial files can be layered on top of each
/// other; see [`ConfigMerger`](crate::config::ConfigMerger).
///
/// # Examples
///
/// ```
/// use hotel::config::{Config, RoomConfig};
///
/// let config: Config = serde_yaml::from_str("rooms:\n  count: 12\nmax_block_size: 4\n").unwrap();
/// assert_eq!(config.rooms, Some(RoomConfig { count: Some(12), ids: None }));
/// assert_eq!(config.max_block_size, Some(4));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Room inventory settings.
    pub rooms: Option<RoomConfig>,

    /// Largest number of rooms a single block may hold.
    pub max_block_size: Option<u8>,

    /// Output verbosity: "quiet", "normal" or "verbose".
    pub log_level: Option<String>,
}

impl Config {
    /// The built-in defaults: rooms 1 to 20, blocks of up to 5, normal logging.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            rooms: Some(RoomConfig::default()),
            max_block_size: u8::try_from(DEFAULT_MAX_BLOCK_SIZE).ok(),
            log_level: Some(LogLevel::Normal.to_string()),
        }
    }

    /// The configured log level, falling back to Normal when unset.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `log_level` is not a known level.
    pub fn resolved_log_level(&self) -> Result<LogLevel> {
        match self.log_level.as_deref() {
            Some(value) => LogLevel::parse(value).map_err(|message| Error::Validation {
                field: "log_level".into(),
                message,
            }),
            None => Ok(LogLevel::Normal),
        }
    }
}

/// Room inventory configuration.
///
/// Either `count` (rooms numbered `1..=count`) or an explicit `ids` list,
/// never both.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoomConfig {
    /// Number of rooms, numbered from 1.
    pub count: Option<u16>,

    /// Explicit room numbers.
    pub ids: Option<Vec<u16>>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            count: Some(RoomInventory::DEFAULT_COUNT),
            ids: None,
        }
    }
}

impl RoomConfig {
    /// Builds the inventory this configuration describes.
    ///
    /// With neither field set, the default inventory is used.
    ///
    /// # Errors
    ///
    /// Returns a validation error if both fields are set, or an inventory
    /// error if the count or ids are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::config::RoomConfig;
    ///
    /// let rooms = RoomConfig { count: None, ids: Some(vec![102, 101]) };
    /// let inventory = rooms.inventory().unwrap();
    /// assert_eq!(inventory.as_slice()[0].number(), 101);
    /// ```
    pub fn inventory(&self) -> Result<RoomInventory> {
        match (self.count, self.ids.as_ref()) {
            (Some(_), Some(_)) => Err(Error::Validation {
                field: "rooms".into(),
                message: "count and ids are mutually exclusive".into(),
            }),
            (None, Some(ids)) => RoomInventory::from_ids(ids.iter().copied()),
            (Some(count), None) => RoomInventory::with_count(count),
            (None, None) => Ok(RoomInventory::default()),
        }
    }
}
