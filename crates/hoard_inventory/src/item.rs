//! # Item Kinds
//!
//! Immutable item metadata. A kind is built once from configuration, wrapped
//! in an [`Arc`] and then shared by every stack that holds it.
//!
//! ## Stacking identity
//!
//! Two kinds stack together only when they are the same variant *and* carry
//! the same id. A wearable `"ore"` never merges with a material `"ore"`.
//!
//! ## Example
//!
//! ```rust,ignore
//! let ore = ItemKind::material(
//!     KindConfig::new("ore_t1").with_display_name("Ore").with_max_stack(999),
//! )?
//! .into_shared();
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{HoardError, HoardResult};

/// Shared reference to an item kind.
pub type KindRef = Arc<ItemKind>;

/// Broad grouping used by presentation and sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Crafting and building materials.
    Material,
    /// Items that can be worn.
    Wearable,
    /// Items consumed on use.
    Consumable,
    /// Anything else.
    Misc,
}

/// Body slot a wearable is meant for.
///
/// Carried as plain data; the inventory never interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipSlot {
    /// Helmets, hats.
    #[default]
    Head,
    /// Armor, shirts.
    Chest,
    /// Trousers, greaves.
    Legs,
    /// Boots.
    Feet,
    /// Gloves.
    Hands,
    /// Rings, amulets.
    Accessory,
}

/// Discriminator of the concrete kind variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum VariantTag {
    /// [`ItemVariant::Material`].
    Material = 0,
    /// [`ItemVariant::Wearable`].
    Wearable = 1,
    /// [`ItemVariant::Consumable`].
    Consumable = 2,
}

impl VariantTag {
    /// Category assigned when the config does not name one.
    #[inline]
    #[must_use]
    pub const fn default_category(self) -> ItemCategory {
        match self {
            Self::Material => ItemCategory::Material,
            Self::Wearable => ItemCategory::Wearable,
            Self::Consumable => ItemCategory::Consumable,
        }
    }
}

/// Variant-specific data of an item kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemVariant {
    /// A raw material. No extra data yet.
    Material,
    /// Something that can be worn.
    Wearable {
        /// Target body slot.
        equip_slot: EquipSlot,
    },
    /// Something consumed on use.
    Consumable {
        /// Cooldown between uses, in milliseconds.
        cooldown_ms: u32,
    },
}

impl ItemVariant {
    /// Returns the discriminator for this variant.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> VariantTag {
        match self {
            Self::Material => VariantTag::Material,
            Self::Wearable { .. } => VariantTag::Wearable,
            Self::Consumable { .. } => VariantTag::Consumable,
        }
    }
}

/// Shared configuration for every kind variant.
///
/// All fields are optional in config files; missing ones take the defaults
/// below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindConfig {
    /// Unique identifier, e.g. `"ore_t1"`. Trimmed on build.
    pub id: String,
    /// Human-readable name.
    pub display_name: String,
    /// Category. Derived from the variant when absent.
    pub category: Option<ItemCategory>,
    /// Maximum stack size. Values below 1 are raised to 1.
    #[serde(deserialize_with = "crate::config::deserialize_max_stack")]
    pub max_stack: u32,
}

impl Default for KindConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            display_name: String::new(),
            category: None,
            max_stack: 1,
        }
    }
}

impl KindConfig {
    /// Creates a config with the given id and defaults for everything else.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the maximum stack size.
    #[must_use]
    pub fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack;
        self
    }
}

/// Immutable description of an item type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemKind {
    id: String,
    display_name: String,
    category: ItemCategory,
    max_stack: u32,
    variant: ItemVariant,
}

impl ItemKind {
    /// Builds a material kind.
    ///
    /// # Errors
    ///
    /// Returns `HoardError::EmptyItemId` if the trimmed id is empty.
    pub fn material(config: KindConfig) -> HoardResult<Self> {
        Self::build(config, ItemVariant::Material)
    }

    /// Builds a wearable kind.
    ///
    /// # Errors
    ///
    /// Returns `HoardError::EmptyItemId` if the trimmed id is empty.
    pub fn wearable(config: KindConfig, equip_slot: EquipSlot) -> HoardResult<Self> {
        Self::build(config, ItemVariant::Wearable { equip_slot })
    }

    /// Builds a consumable kind.
    ///
    /// # Errors
    ///
    /// Returns `HoardError::EmptyItemId` if the trimmed id is empty.
    pub fn consumable(config: KindConfig, cooldown_ms: u32) -> HoardResult<Self> {
        Self::build(config, ItemVariant::Consumable { cooldown_ms })
    }

    fn build(config: KindConfig, variant: ItemVariant) -> HoardResult<Self> {
        let id = config.id.trim();
        if id.is_empty() {
            return Err(HoardError::EmptyItemId);
        }

        let max_stack = if config.max_stack == 0 {
            tracing::warn!("Item {} has max_stack 0, using 1", id);
            1
        } else {
            config.max_stack
        };

        Ok(Self {
            id: id.to_string(),
            display_name: config.display_name,
            category: config
                .category
                .unwrap_or_else(|| variant.tag().default_category()),
            max_stack,
            variant,
        })
    }

    /// Wraps this kind for sharing across stacks.
    #[must_use]
    pub fn into_shared(self) -> KindRef {
        Arc::new(self)
    }

    /// Unique identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name as configured (may be empty).
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Display name, or the id when no display name was configured.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.id
        } else {
            &self.display_name
        }
    }

    /// Item category.
    #[inline]
    #[must_use]
    pub const fn category(&self) -> ItemCategory {
        self.category
    }

    /// Maximum quantity a single stack may hold. Always at least 1.
    #[inline]
    #[must_use]
    pub const fn max_stack(&self) -> u32 {
        self.max_stack
    }

    /// True if more than one unit fits in a stack.
    #[inline]
    #[must_use]
    pub const fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }

    /// Variant-specific data.
    #[inline]
    #[must_use]
    pub const fn variant(&self) -> &ItemVariant {
        &self.variant
    }

    /// Discriminator of the concrete variant.
    #[inline]
    #[must_use]
    pub const fn variant_tag(&self) -> VariantTag {
        self.variant.tag()
    }

    /// Equip slot, for wearables.
    #[must_use]
    pub const fn equip_slot(&self) -> Option<EquipSlot> {
        match self.variant {
            ItemVariant::Wearable { equip_slot } => Some(equip_slot),
            _ => None,
        }
    }

    /// Use cooldown in milliseconds, for consumables.
    #[must_use]
    pub const fn cooldown_ms(&self) -> Option<u32> {
        match self.variant {
            ItemVariant::Consumable { cooldown_ms } => Some(cooldown_ms),
            _ => None,
        }
    }

    /// Stacking identity: same variant and same id.
    #[inline]
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        self.variant_tag() == other.variant_tag() && self.id == other.id
    }
}
