//! # Item Stacks
//!
//! A quantity of one item kind. Every constructor and mutator re-clamps the
//! quantity into `[0, max_stack]`, so a stack is always valid and callers
//! never need to pre-check amounts.
//!
//! A stack with quantity 0 or without a kind is *empty* and means the same as
//! "no stack at all".

use std::fmt;

use crate::item::KindRef;

/// A quantity of a single item kind, clamped to the kind's limit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemStack {
    kind: Option<KindRef>,
    quantity: u32,
}

impl ItemStack {
    /// Creates a stack, clamping `quantity` into `[0, max_stack]`.
    ///
    /// A stack without a kind always has quantity 0.
    #[must_use]
    pub fn new(kind: impl Into<Option<KindRef>>, quantity: u32) -> Self {
        let mut stack = Self {
            kind: kind.into(),
            quantity,
        };
        stack.clamp();
        stack
    }

    /// Creates an empty stack.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            kind: None,
            quantity: 0,
        }
    }

    /// The item kind, if any.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Option<&KindRef> {
        self.kind.as_ref()
    }

    /// Number of items in this stack.
    #[inline]
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Stack limit of the kind, or 0 without a kind.
    #[inline]
    #[must_use]
    pub fn max_stack(&self) -> u32 {
        self.kind.as_ref().map_or(0, |kind| kind.max_stack())
    }

    /// Room left before the stack is full.
    #[inline]
    #[must_use]
    pub fn free_space(&self) -> u32 {
        self.max_stack() - self.quantity
    }

    /// Returns true if this stack holds nothing.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.kind.is_none() || self.quantity == 0
    }

    /// Sets the quantity, clamped.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.clamp();
    }

    /// Adds to the quantity, clamped at the stack limit.
    pub fn add_quantity(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_add(amount);
        self.clamp();
    }

    /// Removes from the quantity, flooring at zero.
    ///
    /// Over-removal is not an error here. `Inventory::remove_at` is the
    /// all-or-nothing variant.
    pub fn remove_quantity(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_sub(amount);
        self.clamp();
    }

    /// True if both stacks hold the same kind and their combined quantity
    /// fits in one stack.
    #[must_use]
    pub fn can_stack_with(&self, other: &Self) -> bool {
        let (Some(kind), Some(other_kind)) = (&self.kind, &other.kind) else {
            return false;
        };
        if !kind.same_kind(other_kind) {
            return false;
        }

        u64::from(self.quantity) + u64::from(other.quantity) <= u64::from(kind.max_stack())
    }

    /// True if this stack holds the given kind.
    #[inline]
    #[must_use]
    pub fn holds(&self, kind: &KindRef) -> bool {
        self.kind.as_ref().is_some_and(|own| own.same_kind(kind))
    }

    /// New stack sharing this kind with a different (clamped) quantity.
    #[must_use]
    pub fn clone_with_quantity(&self, quantity: u32) -> Self {
        Self::new(self.kind.clone(), quantity)
    }

    fn clamp(&mut self) {
        self.quantity = match &self.kind {
            Some(kind) => self.quantity.min(kind.max_stack()),
            None => 0,
        };
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) if self.quantity > 0 => write!(f, "{} x{}", kind.label(), self.quantity),
            _ => f.write_str("EMPTY"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{EquipSlot, ItemKind, KindConfig};

    const MAX_STACK: u32 = 999;

    fn ore() -> KindRef {
        ItemKind::material(
            KindConfig::new("ore")
                .with_display_name("Ore")
                .with_max_stack(MAX_STACK),
        )
        .unwrap()
        .into_shared()
    }

    #[test]
    fn test_create() {
        let ore = ore();
        let stack = ItemStack::new(ore.clone(), 10);
        assert_eq!(stack.kind(), Some(&ore));
        assert_eq!(stack.quantity(), 10);
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_create_clamps() {
        let stack = ItemStack::new(ore(), MAX_STACK * 2);
        assert_eq!(stack.quantity(), MAX_STACK);
    }

    #[test]
    fn test_no_kind_forces_zero() {
        let stack = ItemStack::new(None::<KindRef>, 5);
        assert_eq!(stack.quantity(), 0);
        assert!(stack.is_empty());
        assert_eq!(stack.max_stack(), 0);
    }

    #[test]
    fn test_set_quantity_clamps() {
        let mut stack = ItemStack::new(ore(), 1);
        stack.set_quantity(MAX_STACK * 2);
        assert_eq!(stack.quantity(), MAX_STACK);
    }

    #[test]
    fn test_add_quantity_clamps() {
        let mut stack = ItemStack::new(ore(), 1);
        stack.add_quantity(MAX_STACK * 2);
        assert_eq!(stack.quantity(), MAX_STACK);

        stack.add_quantity(u32::MAX);
        assert_eq!(stack.quantity(), MAX_STACK);
    }

    #[test]
    fn test_remove_quantity_floors_at_zero() {
        let mut stack = ItemStack::new(ore(), MAX_STACK);
        stack.remove_quantity(MAX_STACK * 2);
        assert_eq!(stack.quantity(), 0);
        assert!(stack.is_empty());
        assert!(stack.kind().is_some());
    }

    #[test]
    fn test_can_stack_with_no_kinds() {
        assert!(!ItemStack::empty().can_stack_with(&ItemStack::empty()));
        assert!(!ItemStack::new(ore(), 10).can_stack_with(&ItemStack::empty()));
        assert!(!ItemStack::empty().can_stack_with(&ItemStack::new(ore(), 10)));
    }

    #[test]
    fn test_can_stack_with_different_ids() {
        let other = ItemKind::material(KindConfig::new("other-ore").with_max_stack(MAX_STACK))
            .unwrap()
            .into_shared();
        assert!(!ItemStack::new(ore(), 10).can_stack_with(&ItemStack::new(other, 10)));
    }

    #[test]
    fn test_can_stack_with_different_variants() {
        let worn = ItemKind::wearable(KindConfig::new("ore").with_max_stack(MAX_STACK), EquipSlot::Head)
            .unwrap()
            .into_shared();
        assert!(!ItemStack::new(ore(), 10).can_stack_with(&ItemStack::new(worn, 10)));
    }

    #[test]
    fn test_can_stack_with_overflow() {
        let single = ItemKind::material(KindConfig::new("gem")).unwrap().into_shared();
        let a = ItemStack::new(single.clone(), 1);
        let b = ItemStack::new(single, 1);
        assert!(!a.can_stack_with(&b));
    }

    #[test]
    fn test_can_stack_with_separately_built_kinds() {
        let a = ItemStack::new(ore(), 10);
        let b = ItemStack::new(ore(), 10);
        assert!(a.can_stack_with(&b));
        assert!(a.can_stack_with(&ItemStack::new(ore(), MAX_STACK - 10)));
        assert!(!a.can_stack_with(&ItemStack::new(ore(), MAX_STACK - 9)));
    }

    #[test]
    fn test_clone_with_quantity() {
        let ore = ore();
        let stack = ItemStack::new(ore.clone(), MAX_STACK);
        let cloned = stack.clone_with_quantity(10);
        assert!(std::sync::Arc::ptr_eq(cloned.kind().unwrap(), &ore));
        assert_eq!(cloned.quantity(), 10);
        assert_eq!(stack.quantity(), MAX_STACK);
    }

    #[test]
    fn test_display() {
        assert_eq!(ItemStack::new(ore(), 7).to_string(), "Ore x7");
        assert_eq!(ItemStack::empty().to_string(), "EMPTY");
    }
}
