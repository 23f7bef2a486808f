//! # Shared Inventory
//!
//! Thread-safe handle around an [`Inventory`].
//!
//! Operations routinely touch several slots at once (`add` scans twice,
//! `split` removes and places), so the whole inventory sits behind a single
//! `parking_lot::Mutex`. Each call holds the lock for its full duration and no
//! caller can observe a half-applied operation.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::inventory::{Inventory, InventorySnapshot};
use crate::item::KindRef;

/// Cloneable, lock-protected inventory handle.
#[derive(Clone, Debug)]
pub struct SharedInventory {
    inner: Arc<Mutex<Inventory>>,
}

impl SharedInventory {
    /// Wraps an inventory.
    #[must_use]
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inventory)),
        }
    }

    /// See [`Inventory::add`].
    pub fn add(&self, kind: Option<&KindRef>, amount: u32) -> u32 {
        self.inner.lock().add(kind, amount)
    }

    /// See [`Inventory::remove_at`].
    pub fn remove_at(&self, index: usize, amount: u32) -> bool {
        self.inner.lock().remove_at(index, amount)
    }

    /// See [`Inventory::move_stack`].
    pub fn move_stack(&self, from: usize, to: usize) -> bool {
        self.inner.lock().move_stack(from, to)
    }

    /// See [`Inventory::split`].
    pub fn split(&self, index: usize, amount: u32) -> Option<usize> {
        self.inner.lock().split(index, amount)
    }

    /// See [`Inventory::apply_size`].
    pub fn apply_size(&self, size: usize) {
        self.inner.lock().apply_size(size);
    }

    /// See [`Inventory::find_first_empty_slot`].
    #[must_use]
    pub fn find_first_empty_slot(&self) -> Option<usize> {
        self.inner.lock().find_first_empty_slot()
    }

    /// Number of slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    /// Takes a consistent snapshot.
    #[must_use]
    pub fn snapshot(&self) -> InventorySnapshot {
        self.inner.lock().snapshot()
    }

    /// Runs `f` with shared access while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Inventory) -> R) -> R {
        f(&*self.inner.lock())
    }

    /// Runs `f` with exclusive access while holding the lock.
    ///
    /// Use this to make several operations atomic as a group.
    pub fn write<R>(&self, f: impl FnOnce(&mut Inventory) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}

impl From<Inventory> for SharedInventory {
    fn from(inventory: Inventory) -> Self {
        Self::new(inventory)
    }
}
