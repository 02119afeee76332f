//! Transient per-view references for the coordinating layer.
//!
//! The shell around the views holds at most one "currently editing" and one
//! "currently selling" reference. Both are owner-scoped, not global: they
//! are set when a flow starts and cleared when it completes or is cancelled,
//! including when the target item was deleted out from under the flow.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::Result;
use crate::forms::SaleForm;
use crate::inventory::Inventory;
use crate::models::{Item, ItemPatch};

/// Edit/sell flow state for the coordinating view layer.
#[derive(Debug, Default)]
pub struct Session {
    editing: Option<Uuid>,
    selling: Option<Uuid>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The item currently being edited, if any.
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// The item currently being sold, if any.
    pub fn selling(&self) -> Option<Uuid> {
        self.selling
    }

    // -- Edit flow ---------------------------------------------------------

    /// Enter the edit flow for `item`.
    pub fn begin_edit(&mut self, item: &Item) {
        self.editing = Some(item.id);
    }

    /// Apply the edited fields to the inventory and leave the edit flow.
    ///
    /// If no edit is in progress, or the item has since been deleted, the
    /// patch is dropped; the reference is cleared either way.
    pub fn save_edit(&mut self, inventory: &mut Inventory, patch: ItemPatch) -> Result<bool> {
        let Some(id) = self.editing.take() else {
            return Ok(false);
        };
        inventory.update_item(id, patch)
    }

    /// Leave the edit flow without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // -- Sell flow ---------------------------------------------------------

    /// Enter the sell flow for `item`, returning a blank form dated
    /// `sale_date`.
    pub fn begin_sale(&mut self, item: &Item, sale_date: NaiveDate) -> SaleForm {
        self.selling = Some(item.id);
        SaleForm::new(sale_date)
    }

    /// Confirm the sale: freeze the form into a record, transition the item
    /// to sold, and leave the sell flow.
    pub fn confirm_sale(&mut self, inventory: &mut Inventory, form: SaleForm) -> Result<bool> {
        let Some(id) = self.selling.take() else {
            return Ok(false);
        };
        let Some(purchase_price) = inventory.get_item(id).map(|item| item.purchase_price) else {
            // Sold out from under us (e.g. deleted mid-flow); nothing to do.
            return Ok(false);
        };
        inventory.mark_sold(id, form.into_sale(purchase_price))
    }

    /// Leave the sell flow without recording a sale.
    pub fn cancel_sale(&mut self) {
        self.selling = None;
    }
}
