//! Dashboard statistics derived from the item collection.
//!
//! Every method is a pure derivation over the borrowed snapshot, recomputed
//! per call. Nothing here caches or mutates; the one frozen derived value in
//! the system is the `profit` snapshot stored on each sale record.

use std::collections::HashMap;

use chrono::{Days, Local, NaiveDate};

use crate::config;
use crate::models::{DailyProfit, Item, PlatformSales, SaleRecord, Summary};

/// Number of calendar days in the trailing profit window.
const WINDOW_DAYS: u64 = 7;

// ---------------------------------------------------------------------------
// ReportQuery
// ---------------------------------------------------------------------------

/// Read-only statistics interface over an item snapshot.
pub struct ReportQuery<'a> {
    items: &'a [Item],
}

impl<'a> ReportQuery<'a> {
    /// Create a `ReportQuery` over the given collection snapshot.
    pub fn new(items: &'a [Item]) -> Self {
        Self { items }
    }

    /// Sold items paired with their sale records.
    fn sold(&self) -> impl Iterator<Item = (&'a Item, &'a SaleRecord)> {
        self.items
            .iter()
            .filter_map(|item| item.sale.as_ref().map(|sale| (item, sale)))
    }

    /// Dashboard totals over sold items.
    ///
    /// Margin is total profit over total sale value as a percentage, and 0
    /// when there are no sales yet.
    pub fn summary(&self) -> Summary {
        let mut total_profit = 0.0;
        let mut total_sales = 0.0;
        let mut total_cost = 0.0;
        let mut sold_count = 0usize;

        for (item, sale) in self.sold() {
            total_profit += sale.profit;
            total_sales += sale.sale_price;
            total_cost += item.purchase_price;
            sold_count += 1;
        }

        let margin = if total_sales > 0.0 {
            total_profit / total_sales * 100.0
        } else {
            0.0
        };

        Summary {
            total_profit,
            total_sales,
            total_cost,
            margin,
            sold_count,
            active_count: self.items.len() - sold_count,
        }
    }

    /// Sold-item count per sale platform.
    ///
    /// A missing or empty platform is bucketed under the
    /// [`config::OTHER_PLATFORM_LABEL`] label. Ordered by count descending,
    /// then platform name, so the result is stable across calls.
    pub fn sales_by_platform(&self) -> Vec<PlatformSales> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for (_, sale) in self.sold() {
            let platform = sale
                .sale_platform
                .as_deref()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(config::OTHER_PLATFORM_LABEL);
            *counts.entry(platform).or_default() += 1;
        }

        let mut groups: Vec<PlatformSales> = counts
            .into_iter()
            .map(|(platform, count)| PlatformSales {
                platform: platform.to_string(),
                count,
            })
            .collect();
        groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.platform.cmp(&b.platform)));
        groups
    }

    /// Profit per day for the 7 calendar days ending at `end`, inclusive.
    ///
    /// Buckets are oldest first. A sale lands in a bucket only when its
    /// `sale_date` equals that day exactly; days without sales report 0.
    pub fn daily_profit(&self, end: NaiveDate) -> Vec<DailyProfit> {
        (0..WINDOW_DAYS)
            .rev()
            .filter_map(|back| end.checked_sub_days(Days::new(back)))
            .map(|date| {
                let profit = self
                    .sold()
                    .filter(|(_, sale)| sale.sale_date == date)
                    .map(|(_, sale)| sale.profit)
                    .sum();
                DailyProfit { date, profit }
            })
            .collect()
    }

    /// The trailing 7-day profit window ending today (local calendar date).
    pub fn last_seven_days(&self) -> Vec<DailyProfit> {
        self.daily_profit(Local::now().date_naive())
    }
}
