//! # Inventory System
//!
//! Fixed-length slot array with the four mutating operations: add, remove,
//! move and split. Slots are allocated once; only their contents change.
//!
//! ## Ordering
//!
//! Every scan runs from slot 0 upward. The lowest index always wins, both when
//! topping up existing stacks and when picking an empty slot for a new one.
//!
//! ## Failure model
//!
//! Nothing here returns an error or panics. Bad indices, absent kinds and zero
//! amounts produce a defined `0` / `false` / `None`, and "inventory full" is
//! reported through the returned counts.

use crate::config::InventoryConfig;
use crate::item::KindRef;
use crate::slot::Slot;
use crate::stack::ItemStack;

/// Smallest inventory that can exist. Smaller requests are raised to this.
pub const MIN_INVENTORY_SLOTS: usize = 1;

/// A fixed-size inventory.
///
/// All slots are allocated at creation time.
/// No allocations occur during add/remove/move/split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    /// Pre-allocated slots.
    slots: Vec<Slot>,
    /// Slot count the inventory is configured for.
    size: usize,
}

impl Inventory {
    /// Creates an inventory with `size` empty slots (at least one).
    #[must_use]
    pub fn new(size: usize) -> Self {
        let size = size.max(MIN_INVENTORY_SLOTS);
        Self {
            slots: vec![Slot::new(); size],
            size,
        }
    }

    /// Creates an inventory from config.
    #[must_use]
    pub fn with_config(config: &InventoryConfig) -> Self {
        Self::new(config.size)
    }

    /// Reallocates the slots if their count differs from the configured size.
    ///
    /// When the count already matches, nothing happens and every stack is
    /// kept. Otherwise all slots are reset to empty.
    pub fn initialize_if_needed(&mut self) {
        if self.slots.len() == self.size {
            return;
        }

        self.size = self.size.max(MIN_INVENTORY_SLOTS);
        tracing::debug!(
            "Reinitializing inventory: {} -> {} slots",
            self.slots.len(),
            self.size
        );
        self.slots = vec![Slot::new(); self.size];
    }

    /// Sets the configured size and re-initializes if it changed.
    pub fn apply_size(&mut self, size: usize) {
        self.size = size.max(MIN_INVENTORY_SLOTS);
        self.initialize_if_needed();
    }

    /// Number of slots.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Slot count the inventory is configured for.
    #[inline]
    #[must_use]
    pub const fn configured_size(&self) -> usize {
        self.size
    }

    /// Gets the slot at `index`, or `None` when out of range.
    #[inline]
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// All slots, in index order.
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Checks if every slot is occupied.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.find_first_empty_slot().is_none()
    }

    /// Counts the total quantity of a kind across all slots.
    #[must_use]
    pub fn count_of(&self, kind: &KindRef) -> u64 {
        self.stacks()
            .filter(|stack| stack.holds(kind))
            .map(|stack| u64::from(stack.quantity()))
            .sum()
    }

    /// Finds the first slot holding a kind.
    #[must_use]
    pub fn find_kind(&self, kind: &KindRef) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.stack().is_some_and(|stack| stack.holds(kind)))
    }

    /// Finds the first empty slot.
    #[must_use]
    pub fn find_first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_empty)
    }

    /// Adds items to the inventory and returns how many were placed.
    ///
    /// First tops up existing stacks of the same kind (only for stackable
    /// kinds), then creates new stacks in empty slots. Both passes run from
    /// the lowest index. Returns 0 for an absent kind or a zero amount.
    ///
    /// # Arguments
    ///
    /// * `kind` - The item kind to add
    /// * `amount` - Number of items requested
    pub fn add(&mut self, kind: Option<&KindRef>, amount: u32) -> u32 {
        let Some(kind) = kind else {
            return 0;
        };
        if amount == 0 {
            return 0;
        }

        tracing::debug!("Adding {} of {}", amount, kind.label());

        let mut remaining = amount;

        // First, top up existing stacks
        if kind.is_stackable() {
            for slot in &mut self.slots {
                if remaining == 0 {
                    break;
                }

                let Some(stack) = slot.stack_mut() else {
                    continue;
                };
                if !stack.holds(kind) {
                    continue;
                }

                let space = stack.free_space();
                if space == 0 {
                    continue;
                }

                let before = stack.quantity();
                stack.add_quantity(space.min(remaining));
                remaining -= stack.quantity() - before;
            }
        }

        // Then, use empty slots
        for slot in &mut self.slots {
            if remaining == 0 {
                break;
            }
            if !slot.is_empty() {
                continue;
            }

            let stack_qty = kind.max_stack().min(remaining);
            slot.set(ItemStack::new(kind.clone(), stack_qty));
            remaining -= stack_qty;
        }

        if remaining > 0 {
            tracing::debug!(
                "Inventory full: {} of {} not placed",
                remaining,
                kind.label()
            );
        }

        amount - remaining
    }

    /// Removes exactly `amount` items from one slot.
    ///
    /// All-or-nothing: fails without touching the slot when it holds fewer
    /// than `amount`. A zero amount always succeeds. The slot is cleared when
    /// it reaches zero.
    pub fn remove_at(&mut self, index: usize, amount: u32) -> bool {
        if amount == 0 {
            return true;
        }

        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        let Some(stack) = slot.stack_mut() else {
            return false;
        };
        if stack.quantity() < amount {
            return false;
        }

        stack.remove_quantity(amount);
        slot.normalize();
        true
    }

    /// Moves the stack at `from` onto `to`.
    ///
    /// - Empty destination: the whole stack is relocated.
    /// - Same stackable kind with room: as much as fits is merged into the
    ///   destination; the source keeps the rest.
    /// - Anything else: the two stacks swap places.
    ///
    /// Fails only for identical or out-of-range indices and an empty source.
    pub fn move_stack(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.slots.len() || to >= self.slots.len() {
            return false;
        }
        if self.slots[from].is_empty() {
            return false;
        }

        if self.slots[to].is_empty() {
            let stack = self.slots[from].take();
            self.slots[to].set(stack);
            return true;
        }

        let transfer = match (self.slots[from].stack(), self.slots[to].stack()) {
            (Some(source), Some(dest)) => match source.kind() {
                Some(kind) if kind.is_stackable() && dest.holds(kind) => {
                    source.quantity().min(dest.free_space())
                }
                _ => 0,
            },
            _ => 0,
        };

        if transfer > 0 {
            if let Some(dest) = self.slots[to].stack_mut() {
                dest.add_quantity(transfer);
            }
            if let Some(source) = self.slots[from].stack_mut() {
                source.remove_quantity(transfer);
            }
            self.slots[from].normalize();
            return true;
        }

        self.slots.swap(from, to);
        true
    }

    /// Splits `amount` items off the stack at `index` into the first empty
    /// slot, returning that slot's index.
    ///
    /// Returns `None` when the slot is empty, the kind does not stack, the
    /// amount is zero or would leave nothing behind, or no slot is free.
    pub fn split(&mut self, index: usize, amount: u32) -> Option<usize> {
        let stack = self.slots.get(index)?.stack()?;
        if !stack.kind()?.is_stackable() {
            return None;
        }
        if amount == 0 || amount >= stack.quantity() {
            return None;
        }

        let empty_index = self.find_first_empty_slot()?;

        let source = self.slots[index].stack_mut()?;
        source.remove_quantity(amount);
        let split_off = source.clone_with_quantity(amount);
        self.slots[empty_index].set(split_off);

        Some(empty_index)
    }

    /// Creates a snapshot of the inventory for rollback.
    #[must_use]
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            slots: self.slots.clone(),
            size: self.size,
        }
    }

    /// Restores inventory from a snapshot (rollback).
    pub fn restore(&mut self, snapshot: &InventorySnapshot) {
        self.slots.clone_from(&snapshot.slots);
        self.size = snapshot.size;
    }

    /// One line per slot for the first `limit` slots: `"[i] EMPTY"` or
    /// `"[i] <name> x<quantity>"`.
    #[must_use]
    pub fn describe_slots(&self, limit: usize) -> Vec<String> {
        self.slots
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, slot)| match slot.stack() {
                Some(stack) => format!("[{i}] {stack}"),
                None => format!("[{i}] EMPTY"),
            })
            .collect()
    }

    fn stacks(&self) -> impl Iterator<Item = &ItemStack> {
        self.slots.iter().filter_map(Slot::stack)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_config(&InventoryConfig::default())
    }
}

/// Snapshot of inventory state for transactional rollback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventorySnapshot {
    slots: Vec<Slot>,
    size: usize,
}
