//! The in-memory item collection and its mutation surface.
//!
//! `Inventory` exclusively owns the collection. Every successful mutation
//! re-persists the full list through the [`StorageManager`] before the call
//! returns, so a reload always observes the latest state.

use crate::error::Result;
use crate::models::{Item, ItemDraft, ItemPatch, ItemStatus, SaleRecord};
use crate::storage::StorageManager;
use chrono::Utc;
use uuid::Uuid;

/// Ordered item collection backed by the local store.
///
/// Items are kept most-recently-created first; new items are prepended.
/// Ids are synthesized here (uuid v4), which is what keeps the uniqueness
/// invariant -- nothing else ever assigns an id.
pub struct Inventory {
    storage: StorageManager,
    items: Vec<Item>,
}

impl Inventory {
    /// Open the inventory, loading whatever the store currently holds.
    pub fn open(storage: StorageManager) -> Self {
        let items = storage.load();
        Self { storage, items }
    }

    // -- Read surface ------------------------------------------------------

    /// The full collection, most recently created first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id. Read-only, no side effect.
    pub fn get_item(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The storage manager backing this inventory.
    pub fn storage(&self) -> &StorageManager {
        &self.storage
    }

    // -- Mutations ---------------------------------------------------------

    /// Create an item from an entry-form draft and return it.
    ///
    /// `id`, `created_at`, and `status = listed` are synthesized here; the
    /// draft type has no way to carry them. The new item is prepended.
    pub fn add_item(&mut self, draft: ItemDraft) -> Result<Item> {
        let item = Item {
            id: Uuid::new_v4(),
            name: draft.name,
            purchase_price: draft.purchase_price,
            purchase_source: draft.purchase_source,
            purchase_date: draft.purchase_date,
            notes: draft.notes,
            image: draft.image,
            status: ItemStatus::Listed,
            created_at: Utc::now(),
            sale: None,
        };
        self.items.insert(0, item.clone());
        self.storage.save(&self.items)?;
        Ok(item)
    }

    /// Merge `patch` into the item matching `id`.
    ///
    /// Returns `Ok(true)` if an item was patched and persisted, `Ok(false)`
    /// if no item matched (a silent no-op; the store file is not rewritten).
    pub fn update_item(&mut self, id: Uuid, patch: ItemPatch) -> Result<bool> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };
        patch.apply(item);
        self.storage.save(&self.items)?;
        Ok(true)
    }

    /// Record a sale against the item matching `id`, transitioning it to
    /// `sold`. The transition is one-way; there is no path back to `listed`.
    pub fn mark_sold(&mut self, id: Uuid, sale: SaleRecord) -> Result<bool> {
        self.update_item(
            id,
            ItemPatch {
                sale: Some(sale),
                ..ItemPatch::default()
            },
        )
    }

    /// Remove the item matching `id`. Irrevocable.
    ///
    /// Returns `Ok(true)` if an item was removed, `Ok(false)` for an unknown
    /// id (a silent no-op).
    pub fn delete_item(&mut self, id: Uuid) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.storage.save(&self.items)?;
        Ok(true)
    }
}
