//! Profit computation for a sale transaction.
//!
//! `profit = sale price - shipping - commission - other fees - purchase price`.
//! No rounding is applied here; formatting to whole currency units is a
//! display concern.

// ---------------------------------------------------------------------------
// SaleInputs
// ---------------------------------------------------------------------------

/// The five inputs of the profit formula. Every field defaults to 0, so a
/// partially filled sale form still produces a usable preview.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SaleInputs {
    pub sale_price: f64,
    pub shipping_cost: f64,
    pub commission: f64,
    pub other_fees: f64,
    pub purchase_price: f64,
}

/// Compute the signed profit figure for a sale.
pub fn compute(inputs: &SaleInputs) -> f64 {
    inputs.sale_price
        - inputs.shipping_cost
        - inputs.commission
        - inputs.other_fees
        - inputs.purchase_price
}

/// Coerce a raw monetary field to a number.
///
/// Unparseable or non-finite input becomes 0.0; a stray "abc" in a fee
/// field must never push NaN into a stored record.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
