//! # Configuration
//!
//! Item kinds and inventory sizing are balance data, so they live in TOML
//! files loaded once at startup:
//!
//! ```toml
//! [inventory]
//! size = 24
//!
//! [[items]]
//! type = "material"
//! id = "ore_t1"
//! display_name = "Iron Ore"
//! max_stack = 999
//!
//! [[items]]
//! type = "wearable"
//! id = "helm_leather"
//! display_name = "Leather Cap"
//! equip_slot = "head"
//!
//! [[items]]
//! type = "consumable"
//! id = "potion_heal_small"
//! display_name = "Small Healing Potion"
//! max_stack = 20
//! cooldown_ms = 1500
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::catalog::ItemCatalog;
use crate::error::{HoardError, HoardResult};
use crate::inventory::Inventory;
use crate::item::{EquipSlot, ItemKind, KindConfig, VariantTag};

/// Slot count used when a config does not name one.
pub const DEFAULT_INVENTORY_SLOTS: usize = 24;

/// Inventory sizing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Number of slots. Values below 1 are raised to 1.
    #[serde(deserialize_with = "deserialize_slot_count")]
    pub size: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_INVENTORY_SLOTS,
        }
    }
}

impl InventoryConfig {
    /// Config for an inventory of `size` slots.
    #[must_use]
    pub const fn with_size(size: usize) -> Self {
        Self { size }
    }
}

/// Reads a count that must be at least 1.
///
/// Zero and negative values are raised to 1 with a warning instead of being
/// rejected, the same way `ItemKind` treats `max_stack = 0`.
fn read_count<'de, D>(deserializer: D, field: &str) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    if raw < 1 {
        tracing::warn!("Config {} = {} is below 1, using 1", field, raw);
        return Ok(1);
    }
    Ok(raw)
}

fn deserialize_slot_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let count = read_count(deserializer, "size")?;
    usize::try_from(count).map_err(serde::de::Error::custom)
}

pub(crate) fn deserialize_max_stack<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = read_count(deserializer, "max_stack")?;
    u32::try_from(count).map_err(serde::de::Error::custom)
}

/// One item kind as written in a config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Which variant to build.
    #[serde(rename = "type")]
    pub variant: VariantTag,
    /// Fields shared by every variant.
    #[serde(flatten)]
    pub kind: KindConfig,
    /// Body slot. Required for wearables, ignored otherwise.
    #[serde(default)]
    pub equip_slot: Option<EquipSlot>,
    /// Use cooldown for consumables, in milliseconds.
    #[serde(default)]
    pub cooldown_ms: u32,
}

impl ItemRecord {
    /// Builds the item kind described by this record.
    ///
    /// # Errors
    ///
    /// Returns `HoardError::EmptyItemId` for a blank id and
    /// `HoardError::MissingField` for a wearable without `equip_slot`.
    pub fn build(&self) -> HoardResult<ItemKind> {
        let config = self.kind.clone();

        match self.variant {
            VariantTag::Material => ItemKind::material(config),
            VariantTag::Wearable => {
                let equip_slot = self.equip_slot.ok_or_else(|| HoardError::MissingField {
                    item_id: self.kind.id.trim().to_string(),
                    field: "equip_slot",
                })?;
                ItemKind::wearable(config, equip_slot)
            }
            VariantTag::Consumable => ItemKind::consumable(config, self.cooldown_ms),
        }
    }
}

/// Top-level config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoardConfig {
    /// Inventory sizing.
    pub inventory: InventoryConfig,
    /// Item kinds to register.
    pub items: Vec<ItemRecord>,
}

impl HoardConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `HoardError::InvalidConfig` if the text is not valid TOML or
    /// does not match the expected layout.
    pub fn from_toml_str(text: &str) -> HoardResult<Self> {
        toml::from_str(text)
            .map_err(|e| HoardError::InvalidConfig(format!("Failed to parse config: {e}")))
    }

    /// Loads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `HoardError::InvalidConfig` if the file cannot be read or
    /// parsed.
    pub fn load(path: impl AsRef<Path>) -> HoardResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            HoardError::InvalidConfig(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Builds the item catalog from the `items` list.
    ///
    /// # Errors
    ///
    /// Returns the first record error or duplicate id.
    pub fn build_catalog(&self) -> HoardResult<ItemCatalog> {
        ItemCatalog::from_records(&self.items)
    }

    /// Builds an empty inventory sized by `inventory.size`.
    #[must_use]
    pub fn build_inventory(&self) -> Inventory {
        Inventory::with_config(&self.inventory)
    }
}
