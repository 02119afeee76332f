use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Summary — dashboard totals over sold items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    pub total_profit: f64,
    pub total_sales: f64,
    pub total_cost: f64,
    /// `total_profit / total_sales * 100`, or 0 when there are no sales.
    pub margin: f64,
    pub sold_count: usize,
    pub active_count: usize,
}

// ---------------------------------------------------------------------------
// PlatformSales — sold-item count per sale platform
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlatformSales {
    pub platform: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// DailyProfit — one day's profit bucket in the trailing window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DailyProfit {
    pub date: NaiveDate,
    pub profit: f64,
}
