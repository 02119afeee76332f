//! Resale inventory tracker.
//!
//! Records purchased items, marks them sold with a computed profit, and
//! derives dashboard statistics. The whole collection persists as one JSON
//! document in a local data directory and is re-saved after every mutation.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use resell_tracker::models::ItemDraft;
//! use resell_tracker::ResellTracker;
//!
//! let mut tracker = ResellTracker::builder().build().unwrap();
//!
//! // Record a purchase
//! let item = tracker
//!     .add_item(ItemDraft {
//!         name: "Vintage Nike jacket".into(),
//!         purchase_price: 200.0,
//!         purchase_source: Some("Charity Shop".into()),
//!         purchase_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//!         notes: None,
//!         image: None,
//!     })
//!     .unwrap();
//!
//! // Dashboard totals
//! let summary = tracker.reports().summary();
//! assert_eq!(summary.active_count, 1);
//! # let _ = item;
//! ```

pub mod config;
pub mod error;
pub mod forms;
pub mod inventory;
pub mod models;
pub mod profit;
pub mod queries;
pub mod session;
pub mod storage;

pub use error::{Result, TrackerError};
pub use forms::SaleForm;
pub use inventory::Inventory;
pub use queries::ReportQuery;
pub use session::Session;
pub use storage::StorageManager;

use std::fmt;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use models::{Item, ItemDraft, ItemPatch, SaleRecord};

// ---------------------------------------------------------------------------
// ResellTrackerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ResellTracker`] instance.
///
/// Use [`ResellTracker::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ResellTrackerBuilder::build).
#[derive(Default)]
pub struct ResellTrackerBuilder {
    data_dir: Option<PathBuf>,
}

impl ResellTrackerBuilder {
    /// Set a custom data directory.
    ///
    /// If not set, the platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/resell-tracker` on Linux,
    /// `~/Library/Application Support/resell-tracker` on macOS).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the tracker, loading the persisted collection.
    ///
    /// A missing or corrupt store document starts the tracker with an empty
    /// collection; it never fails the build.
    pub fn build(self) -> Result<ResellTracker> {
        let storage = StorageManager::new(self.data_dir)?;
        let inventory = Inventory::open(storage);
        Ok(ResellTracker { inventory })
    }
}

// ---------------------------------------------------------------------------
// ResellTracker
// ---------------------------------------------------------------------------

/// The main entry point for the tracker.
///
/// Owns the [`Inventory`] (which owns the collection and its storage) and
/// exposes the item operations plus the report query interface as a
/// lightweight borrowing wrapper.
///
/// Created via [`ResellTracker::builder()`].
pub struct ResellTracker {
    inventory: Inventory,
}

impl ResellTracker {
    /// Create a new builder for configuring the tracker.
    pub fn builder() -> ResellTrackerBuilder {
        ResellTrackerBuilder::default()
    }

    // -- Item operations ---------------------------------------------------

    /// The full collection, most recently created first.
    pub fn items(&self) -> &[Item] {
        self.inventory.items()
    }

    /// Record a new purchase. See [`Inventory::add_item`].
    pub fn add_item(&mut self, draft: ItemDraft) -> Result<Item> {
        self.inventory.add_item(draft)
    }

    /// Patch an existing item. See [`Inventory::update_item`].
    pub fn update_item(&mut self, id: Uuid, patch: ItemPatch) -> Result<bool> {
        self.inventory.update_item(id, patch)
    }

    /// Record a sale, transitioning the item to sold.
    pub fn mark_sold(&mut self, id: Uuid, sale: SaleRecord) -> Result<bool> {
        self.inventory.mark_sold(id, sale)
    }

    /// Delete an item. See [`Inventory::delete_item`].
    pub fn delete_item(&mut self, id: Uuid) -> Result<bool> {
        self.inventory.delete_item(id)
    }

    /// Look up an item by id.
    pub fn get_item(&self, id: Uuid) -> Option<&Item> {
        self.inventory.get_item(id)
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the dashboard statistics interface.
    ///
    /// Returns a lightweight wrapper over the current collection snapshot;
    /// everything it derives is recomputed per call.
    pub fn reports(&self) -> ReportQuery<'_> {
        ReportQuery::new(self.inventory.items())
    }

    // -- Advanced access ---------------------------------------------------

    /// Return a reference to the underlying [`Inventory`].
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Return a mutable reference to the underlying [`Inventory`] for use
    /// with [`Session`] flows.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for ResellTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sold = self
            .inventory
            .items()
            .iter()
            .filter(|item| item.is_sold())
            .count();
        write!(
            f,
            "ResellTracker(data_dir={}, items={}, sold={})",
            self.inventory.storage().data_dir.display(),
            self.inventory.len(),
            sold
        )
    }
}
