use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ItemStatus — lifecycle state of a tracked item
// ---------------------------------------------------------------------------

/// Lifecycle state. Every item starts out `listed`; the only transition is
/// `listed` -> `sold`, performed by recording a [`SaleRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Listed,
    Sold,
}

// ---------------------------------------------------------------------------
// SaleRecord — sale fields, present only on sold items
// ---------------------------------------------------------------------------

/// The sale half of an item. Grouping the fields keeps a half-populated sale
/// unrepresentable: an item either has no `SaleRecord` or a complete one.
///
/// `profit` is the snapshot computed at sale confirmation
/// (see [`crate::profit::compute`]); it is stored, not re-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub sale_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_platform: Option<String>,
    pub sale_date: NaiveDate,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(default)]
    pub commission: f64,
    #[serde(default)]
    pub other_fees: f64,
    pub profit: f64,
}

// ---------------------------------------------------------------------------
// Item — one tracked inventory unit
// ---------------------------------------------------------------------------

/// One tracked inventory unit, purchased and optionally resold.
///
/// Serializes in camelCase with the sale fields flattened into the item
/// object, matching the layout existing store files already use, so they
/// load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub purchase_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_source: Option<String>,
    pub purchase_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Encoded image payload, already resized before it reaches the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub sale: Option<SaleRecord>,
}

impl Item {
    pub fn is_sold(&self) -> bool {
        self.status == ItemStatus::Sold
    }
}

// ---------------------------------------------------------------------------
// ItemDraft — entry-form payload for creating an item
// ---------------------------------------------------------------------------

/// What the entry form submits. Carries no `id`, `status`, or `created_at`
/// field: those are synthesized by the store at creation, so a caller cannot
/// smuggle them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    pub purchase_price: f64,
    #[serde(default)]
    pub purchase_source: Option<String>,
    pub purchase_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

// ---------------------------------------------------------------------------
// ItemPatch — shallow field merge for updates
// ---------------------------------------------------------------------------

/// Shallow patch applied by [`Inventory::update_item`](crate::Inventory::update_item).
/// `None` fields are left untouched. Setting `sale` performs the one-way
/// `listed` -> `sold` transition; there is no way to revert it.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub purchase_price: Option<f64>,
    pub purchase_source: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub image: Option<String>,
    pub sale: Option<SaleRecord>,
}

impl ItemPatch {
    /// Merge the present fields into `item`.
    pub(crate) fn apply(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(price) = self.purchase_price {
            item.purchase_price = price;
        }
        if let Some(source) = self.purchase_source {
            item.purchase_source = Some(source);
        }
        if let Some(date) = self.purchase_date {
            item.purchase_date = date;
        }
        if let Some(notes) = self.notes {
            item.notes = Some(notes);
        }
        if let Some(image) = self.image {
            item.image = Some(image);
        }
        if let Some(sale) = self.sale {
            item.sale = Some(sale);
            item.status = ItemStatus::Sold;
        }
    }
}
