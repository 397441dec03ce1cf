#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotel
//!
//! A room reservation and availability engine for a hotel with a fixed set
//! of rooms.
//!
//! Guests reserve single rooms for half-open date ranges, event organizers
//! hold blocks of rooms for a group, and block rooms are later handed out to
//! members of that group. The engine never double-books a room.
//!
//! ## Core Types
//!
//! - [`Registry`]: the hotel, owning the room inventory and booking ledger
//! - [`SharedRegistry`]: a lock-guarded handle for concurrent callers
//! - [`DateRange`]: check-in inclusive, check-out exclusive stays
//! - [`Reservation`], [`Block`] and [`Booking`]: ledger entries
//! - [`Room`] and [`RoomInventory`]: validated room numbers
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use hotel::{Error, Registry};
//!
//! let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let mut hotel = Registry::default();
//!
//! hotel.reserve_block("Group1", jan(1), jan(3), 2).unwrap();
//! assert_eq!(hotel.available_rooms_for(jan(1), jan(3)).unwrap().len(), 18);
//!
//! let rooms = hotel.reserve_room_in_block("Group1", 2).unwrap();
//! assert_eq!(rooms.len(), 2);
//! assert!(matches!(
//!     hotel.reserve_room_in_block("Group1", 1),
//!     Err(Error::BlockFullyBooked { .. })
//! ));
//! ```

pub mod block;
pub mod booking;
pub mod config;
pub mod date_range;
pub mod error;
pub mod logging;
pub mod registry;
pub mod reservation;
pub mod room;

// Re-export key types at crate root for convenience
pub use block::{Block, BlockBooking};
pub use booking::Booking;
pub use config::{Config, ConfigBuilder};
pub use date_range::DateRange;
pub use error::{Error, Result};
pub use logging::{init_logger, init_logger_from_config, install_logger, LogLevel, Logger};
pub use registry::{Registry, SharedRegistry};
pub use reservation::Reservation;
pub use room::{Room, RoomInventory};
