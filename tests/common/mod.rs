//! Shared test fixtures for the tracker integration tests.
//!
//! Provides `setup_tracker()`, which builds a tracker over a temp data
//! directory, plus small constructors for drafts and sale records.

#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use resell_tracker::models::{Item, ItemDraft, ItemStatus, SaleRecord};
use resell_tracker::ResellTracker;
use tempfile::TempDir;
use uuid::Uuid;

/// Build a tracker over a fresh temp data directory.
///
/// Returns `(ResellTracker, TempDir)`. The caller must keep the `TempDir`
/// alive for the duration of the test so the store directory is not deleted
/// prematurely.
pub fn setup_tracker() -> (ResellTracker, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let tracker = ResellTracker::builder()
        .data_dir(tmp.path())
        .build()
        .unwrap();
    (tracker, tmp)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A minimal entry-form draft.
pub fn draft(name: &str, purchase_price: f64) -> ItemDraft {
    ItemDraft {
        name: name.to_string(),
        purchase_price,
        purchase_source: Some("Charity Shop".to_string()),
        purchase_date: date(2024, 3, 1),
        notes: None,
        image: None,
    }
}

/// A standalone listed item, for tests that bypass the tracker facade.
pub fn item(name: &str, purchase_price: f64) -> Item {
    Item {
        id: Uuid::new_v4(),
        name: name.to_string(),
        purchase_price,
        purchase_source: None,
        purchase_date: date(2024, 3, 1),
        notes: None,
        image: None,
        status: ItemStatus::Listed,
        created_at: Utc::now(),
        sale: None,
    }
}

/// A sale record with no fees; `profit` is `sale_price - purchase cost` as
/// computed by the caller.
pub fn sale(sale_price: f64, platform: Option<&str>, sale_date: NaiveDate, profit: f64) -> SaleRecord {
    SaleRecord {
        sale_price,
        sale_platform: platform.map(|p| p.to_string()),
        sale_date,
        shipping_cost: 0.0,
        commission: 0.0,
        other_fees: 0.0,
        profit,
    }
}
