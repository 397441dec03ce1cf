//! A thread-safe registry handle.
//!
//! Room selection reads the ledger and then appends to it. Two callers
//! interleaving those steps could both pick the same room, so every
//! operation here holds one lock for its whole read-then-write sequence.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::block::Block;
use crate::booking::Booking;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::reservation::Reservation;
use crate::room::Room;

/// Cloneable, lock-guarded access to a single [`Registry`].
///
/// Queries return owned copies so no borrow outlives the lock.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use chrono::NaiveDate;
/// use hotel::{Registry, SharedRegistry};
///
/// let hotel = SharedRegistry::new(Registry::default());
/// let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
///
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let hotel = hotel.clone();
///         thread::spawn(move || hotel.create_reservation(&format!("guest-{i}"), jan(1), jan(3)))
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap().unwrap();
/// }
/// assert_eq!(hotel.available_rooms_for(jan(1), jan(3)).unwrap().len(), 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Wraps a registry for shared use.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Registry>> {
        self.inner.lock().map_err(|_| Error::LockPoisoned)
    }

    /// Runs `f` with exclusive access to the registry.
    ///
    /// Use this to compose several operations atomically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if another thread panicked while
    /// holding the lock, or whatever `f` returns.
    pub fn with_registry<T>(&self, f: impl FnOnce(&mut Registry) -> Result<T>) -> Result<T> {
        let mut guard = self.lock()?;
        f(&mut guard)
    }

    /// See [`Registry::available_rooms_for`].
    ///
    /// # Errors
    ///
    /// Same as [`Registry::available_rooms_for`], plus [`Error::LockPoisoned`].
    pub fn available_rooms_for(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<BTreeSet<Room>> {
        self.lock()?.available_rooms_for(check_in, check_out)
    }

    /// See [`Registry::create_reservation`].
    ///
    /// # Errors
    ///
    /// Same as [`Registry::create_reservation`], plus [`Error::LockPoisoned`].
    pub fn create_reservation(
        &self,
        guest_name: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Reservation> {
        self.lock()?
            .create_reservation(guest_name, check_in, check_out)
            .cloned()
    }

    /// See [`Registry::find_reservation`].
    ///
    /// # Errors
    ///
    /// Same as [`Registry::find_reservation`], plus [`Error::LockPoisoned`].
    pub fn find_reservation(&self, guest_name: &str) -> Result<Reservation> {
        self.lock()?.find_reservation(guest_name).cloned()
    }

    /// See [`Registry::bookings_on`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if the lock is poisoned.
    pub fn bookings_on(&self, date: NaiveDate) -> Result<Vec<Booking>> {
        Ok(self
            .lock()?
            .bookings_on(date)
            .into_iter()
            .cloned()
            .collect())
    }

    /// See [`Registry::reserve_block`].
    ///
    /// # Errors
    ///
    /// Same as [`Registry::reserve_block`], plus [`Error::LockPoisoned`].
    pub fn reserve_block(
        &self,
        group_name: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_count: usize,
    ) -> Result<Block> {
        self.lock()?
            .reserve_block(group_name, check_in, check_out, room_count)
            .cloned()
    }

    /// See [`Registry::find_block`].
    ///
    /// # Errors
    ///
    /// Same as [`Registry::find_block`], plus [`Error::LockPoisoned`].
    pub fn find_block(&self, group_name: &str) -> Result<Block> {
        self.lock()?.find_block(group_name).cloned()
    }

    /// See [`Registry::available_rooms_in_block`].
    ///
    /// # Errors
    ///
    /// Same as [`Registry::available_rooms_in_block`], plus
    /// [`Error::LockPoisoned`].
    pub fn available_rooms_in_block(&self, group_name: &str) -> Result<BTreeSet<Room>> {
        self.lock()?.available_rooms_in_block(group_name).cloned()
    }

    /// See [`Registry::reserve_room_in_block`].
    ///
    /// # Errors
    ///
    /// Same as [`Registry::reserve_room_in_block`], plus
    /// [`Error::LockPoisoned`].
    pub fn reserve_room_in_block(&self, group_name: &str, count: usize) -> Result<Vec<Room>> {
        self.lock()?.reserve_room_in_block(group_name, count)
    }

    /// See [`Registry::reserve_room_in_block_for`].
    ///
    /// # Errors
    ///
    /// Same as [`Registry::reserve_room_in_block_for`], plus
    /// [`Error::LockPoisoned`].
    pub fn reserve_room_in_block_for(
        &self,
        group_name: &str,
        guest_name: &str,
        count: usize,
    ) -> Result<Vec<Room>> {
        self.lock()?
            .reserve_room_in_block_for(group_name, guest_name, count)
    }

    /// Copies the current ledger.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<Booking>> {
        Ok(self.lock()?.all_bookings().to_vec())
    }
}
