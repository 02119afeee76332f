//! Sale-entry form state.
//!
//! Holds the raw text the user typed into the monetary fields and recomputes
//! the profit preview on every read, the same "derive on read" shape the
//! dashboard statistics use. The profit is only frozen into a record once,
//! at confirmation.

use chrono::NaiveDate;

use crate::models::SaleRecord;
use crate::profit::{self, SaleInputs};

/// In-progress sale entry for one item.
///
/// Monetary fields stay raw strings until confirmation so the preview can
/// track keystroke-level edits; [`profit::parse_amount`] coerces anything
/// unparseable to 0.
#[derive(Debug, Clone)]
pub struct SaleForm {
    pub sale_price: String,
    pub sale_platform: String,
    pub sale_date: NaiveDate,
    pub shipping_cost: String,
    pub commission: String,
    pub other_fees: String,
}

impl SaleForm {
    /// Start a blank form dated `sale_date` (the date picker defaults this
    /// to today).
    pub fn new(sale_date: NaiveDate) -> Self {
        Self {
            sale_price: String::new(),
            sale_platform: String::new(),
            sale_date,
            shipping_cost: String::new(),
            commission: String::new(),
            other_fees: String::new(),
        }
    }

    /// Coerce the current field values into profit-formula inputs.
    fn inputs(&self, purchase_price: f64) -> SaleInputs {
        SaleInputs {
            sale_price: profit::parse_amount(&self.sale_price),
            shipping_cost: profit::parse_amount(&self.shipping_cost),
            commission: profit::parse_amount(&self.commission),
            other_fees: profit::parse_amount(&self.other_fees),
            purchase_price,
        }
    }

    /// The live profit preview for the current field values.
    pub fn profit_preview(&self, purchase_price: f64) -> f64 {
        profit::compute(&self.inputs(purchase_price))
    }

    /// Confirm the sale: coerce the fields one final time and freeze the
    /// resulting profit into the record.
    pub fn into_sale(self, purchase_price: f64) -> SaleRecord {
        let inputs = self.inputs(purchase_price);
        let platform = self.sale_platform.trim();
        SaleRecord {
            sale_price: inputs.sale_price,
            sale_platform: (!platform.is_empty()).then(|| platform.to_string()),
            sale_date: self.sale_date,
            shipping_cost: inputs.shipping_cost,
            commission: inputs.commission,
            other_fees: inputs.other_fees,
            profit: profit::compute(&inputs),
        }
    }
}
