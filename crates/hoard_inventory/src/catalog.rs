//! # Item Catalog
//!
//! Registry of every item kind known to the game, keyed by id. Kinds are
//! handed out as [`KindRef`]s so all stacks of one kind share one allocation.

use std::collections::HashMap;

use crate::config::ItemRecord;
use crate::error::{HoardError, HoardResult};
use crate::item::{ItemKind, KindRef};

/// Item kinds by id, in registration order.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    /// Kinds in registration order.
    kinds: Vec<KindRef>,
    /// Index into `kinds` by id.
    by_id: HashMap<String, usize>,
}

impl ItemCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from config records.
    ///
    /// # Errors
    ///
    /// Returns the first invalid record or duplicate id.
    pub fn from_records(records: &[ItemRecord]) -> HoardResult<Self> {
        let mut catalog = Self::new();
        for record in records {
            catalog.register(record.build()?)?;
        }
        tracing::info!("Loaded {} item kinds", catalog.len());
        Ok(catalog)
    }

    /// Registers a kind and returns the shared handle.
    ///
    /// # Errors
    ///
    /// Returns `HoardError::DuplicateItem` if the id is already taken.
    pub fn register(&mut self, kind: ItemKind) -> HoardResult<KindRef> {
        if self.by_id.contains_key(kind.id()) {
            return Err(HoardError::DuplicateItem(kind.id().to_string()));
        }

        let kind = kind.into_shared();
        self.by_id.insert(kind.id().to_string(), self.kinds.len());
        self.kinds.push(KindRef::clone(&kind));
        Ok(kind)
    }

    /// Looks up a kind by id. Surrounding whitespace is ignored.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&KindRef> {
        self.by_id.get(id.trim()).map(|&index| &self.kinds[index])
    }

    /// Looks up a kind by id, failing when it is unknown.
    ///
    /// # Errors
    ///
    /// Returns `HoardError::UnknownItem` if no kind has this id.
    pub fn require(&self, id: &str) -> HoardResult<&KindRef> {
        self.get(id)
            .ok_or_else(|| HoardError::UnknownItem(id.trim().to_string()))
    }

    /// Number of registered kinds.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// True if no kinds are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterates kinds in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &KindRef> {
        self.kinds.iter()
    }
}
