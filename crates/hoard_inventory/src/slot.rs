//! # Inventory Slots
//!
//! A slot holds zero or one stack. A held stack is never empty: storing an
//! empty stack leaves the slot holding nothing.

use crate::stack::ItemStack;

/// A single inventory cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    stack: Option<ItemStack>,
}

impl Slot {
    /// Creates an empty slot.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: None }
    }

    /// The held stack, if any.
    #[inline]
    #[must_use]
    pub const fn stack(&self) -> Option<&ItemStack> {
        self.stack.as_ref()
    }

    /// Returns true if the slot holds nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.as_ref().map_or(true, ItemStack::is_empty)
    }

    /// Stores a stack. Empty stacks (and `None`) clear the slot.
    pub fn set(&mut self, stack: impl Into<Option<ItemStack>>) {
        self.stack = stack.into().filter(|stack| !stack.is_empty());
    }

    /// Empties the slot.
    #[inline]
    pub fn clear(&mut self) {
        self.stack = None;
    }

    /// Removes and returns the held stack.
    pub(crate) fn take(&mut self) -> Option<ItemStack> {
        self.stack.take()
    }

    /// Mutable access for the inventory. Callers must call [`Slot::normalize`]
    /// after changing the quantity.
    pub(crate) fn stack_mut(&mut self) -> Option<&mut ItemStack> {
        self.stack.as_mut()
    }

    /// Drops the held stack if it went empty.
    pub(crate) fn normalize(&mut self) {
        if self.stack.as_ref().is_some_and(ItemStack::is_empty) {
            self.stack = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemKind, KindConfig, KindRef};

    fn ore() -> KindRef {
        ItemKind::material(KindConfig::new("ore").with_display_name("Ore").with_max_stack(999))
            .unwrap()
            .into_shared()
    }

    #[test]
    fn test_new_slot_is_empty() {
        let slot = Slot::new();
        assert!(slot.is_empty());
        assert!(slot.stack().is_none());
    }

    #[test]
    fn test_set_none_is_empty() {
        let mut slot = Slot::new();
        slot.set(None::<ItemStack>);
        assert!(slot.is_empty());
        assert!(slot.stack().is_none());
    }

    #[test]
    fn test_set_kindless_stack_is_empty() {
        let mut slot = Slot::new();
        slot.set(ItemStack::new(None::<KindRef>, 0));
        assert!(slot.is_empty());
        assert!(slot.stack().is_none());
    }

    #[test]
    fn test_set_zero_quantity_is_empty() {
        let mut slot = Slot::new();
        slot.set(ItemStack::new(ore(), 0));
        assert!(slot.is_empty());
        assert!(slot.stack().is_none());
    }

    #[test]
    fn test_set_non_empty() {
        let ore = ore();
        let mut slot = Slot::new();
        slot.set(ItemStack::new(ore.clone(), 1));

        assert!(!slot.is_empty());
        let stack = slot.stack().unwrap();
        assert_eq!(stack.kind(), Some(&ore));
        assert_eq!(stack.quantity(), 1);
    }

    #[test]
    fn test_clear() {
        let mut slot = Slot::new();
        slot.set(ItemStack::new(ore(), 1));
        slot.clear();
        assert!(slot.is_empty());
        assert!(slot.stack().is_none());
    }

    #[test]
    fn test_normalize_drops_emptied_stack() {
        let mut slot = Slot::new();
        slot.set(ItemStack::new(ore(), 3));
        if let Some(stack) = slot.stack_mut() {
            stack.remove_quantity(3);
        }
        slot.normalize();
        assert!(slot.stack().is_none());
    }
}
