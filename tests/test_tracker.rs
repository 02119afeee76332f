//! End-to-end flow through the tracker facade: record purchases, sell,
//! check the dashboard, reopen from disk.

mod common;

use resell_tracker::models::ItemStatus;
use resell_tracker::{ResellTracker, Session};

#[test]
fn full_purchase_to_dashboard_flow() {
    let tmp = tempfile::tempdir().unwrap();
    let mut tracker = ResellTracker::builder()
        .data_dir(tmp.path())
        .build()
        .unwrap();

    // Record two purchases
    let jacket = tracker.add_item(common::draft("Vintage Nike jacket", 200.0)).unwrap();
    let camera = tracker.add_item(common::draft("Film camera", 80.0)).unwrap();
    assert_eq!(tracker.items().len(), 2);
    assert!(tracker.items().iter().all(|i| i.status == ItemStatus::Listed));

    // Sell the jacket through the session flow
    let mut session = Session::new();
    let mut form = session.begin_sale(&jacket, common::date(2024, 6, 10));
    form.sale_price = "500".to_string();
    form.sale_platform = "Vinted".to_string();
    form.shipping_cost = "50".to_string();
    form.commission = "25".to_string();
    assert_eq!(form.profit_preview(jacket.purchase_price), 225.0);
    session.confirm_sale(tracker.inventory_mut(), form).unwrap();

    // Dashboard reflects the sale
    let summary = tracker.reports().summary();
    assert_eq!(summary.sold_count, 1);
    assert_eq!(summary.active_count, 1);
    assert_eq!(summary.total_profit, 225.0);

    let window = tracker.reports().daily_profit(common::date(2024, 6, 10));
    assert_eq!(window[6].profit, 225.0);

    // Display diagnostics
    let display = format!("{}", tracker);
    assert!(display.contains("ResellTracker"));
    assert!(display.contains("items=2"));
    assert!(display.contains("sold=1"));

    // Delete the camera, then reopen from disk and verify the surviving state
    tracker.delete_item(camera.id).unwrap();
    drop(tracker);

    let reopened = ResellTracker::builder()
        .data_dir(tmp.path())
        .build()
        .unwrap();
    assert_eq!(reopened.items().len(), 1);
    let jacket_again = reopened.get_item(jacket.id).unwrap();
    assert_eq!(jacket_again.status, ItemStatus::Sold);
    assert_eq!(jacket_again.sale.as_ref().unwrap().profit, 225.0);
    assert_eq!(reopened.reports().summary().active_count, 0);
}
