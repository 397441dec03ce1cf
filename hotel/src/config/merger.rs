//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use hotel::config::{Config, ConfigMerger};
///
/// let low = Config { max_block_size: Some(3), ..Default::default() };
/// let high = Config { max_block_size: Some(4), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_block_size, Some(4));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given lowest precedence first, into one config.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Rooms: atomic replacement, so a `count` from one layer never
    ///   combines with `ids` from another
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.rooms.is_some() {
            target.rooms.clone_from(&source.rooms);
        }

        if source.max_block_size.is_some() {
            target.max_block_size = source.max_block_size;
        }

        if source.log_level.is_some() {
            target.log_level.clone_from(&source.log_level);
        }
    }
}
