//! # HOARD Inventory
//!
//! Slot-based inventory with stacking rules for the HOARD game engine.
//!
//! ## Design Principles
//!
//! 1. **Always-valid stacks** - Quantities clamp into `[0, max_stack]` on every change
//! 2. **No error paths in the hot path** - Bad input maps to `0` / `false` / `None`
//! 3. **Lowest index wins** - Every scan runs from slot 0 upward
//! 4. **External configuration** - Item kinds and inventory size come from TOML files
//!
//! ## Layering
//!
//! ```text
//! ItemKind  <-  ItemStack  <-  Slot  <-  Inventory  <-  SharedInventory
//! ```
//!
//! Each layer only knows about the ones to its left.
//!
//! ## Thread Safety
//!
//! [`Inventory`] is a plain single-threaded value. Wrap it in a
//! [`SharedInventory`] to share it: every operation then runs under one lock.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hoard_inventory::{HoardConfig, Inventory};
//!
//! let config = HoardConfig::load("data/items.toml")?;
//! let catalog = config.build_catalog()?;
//! let mut inventory = config.build_inventory();
//!
//! let ore = catalog.require("ore_t1")?;
//! let added = inventory.add(Some(ore), 120);
//! if let Some(new_slot) = inventory.split(0, 10) {
//!     inventory.move_stack(new_slot, 5);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod item;
pub mod shared;
pub mod slot;
pub mod stack;

pub use catalog::ItemCatalog;
pub use config::{HoardConfig, InventoryConfig, ItemRecord};
pub use error::{HoardError, HoardResult};
pub use inventory::{Inventory, InventorySnapshot};
pub use item::{EquipSlot, ItemCategory, ItemKind, ItemVariant, KindConfig, KindRef, VariantTag};
pub use shared::SharedInventory;
pub use slot::Slot;
pub use stack::ItemStack;
