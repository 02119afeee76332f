//! Dashboard statistics tests: totals, margin, grouping, 7-day window.

mod common;

use resell_tracker::models::PlatformSales;

// ---------------------------------------------------------------------------
// summary
// ---------------------------------------------------------------------------

#[test]
fn summary_totals_cover_sold_items_only() {
    let (mut tracker, _tmp) = common::setup_tracker();

    let a = tracker.add_item(common::draft("a", 200.0)).unwrap();
    let b = tracker.add_item(common::draft("b", 100.0)).unwrap();
    tracker.add_item(common::draft("still listed", 50.0)).unwrap();

    tracker
        .mark_sold(a.id, common::sale(500.0, Some("eBay"), common::date(2024, 6, 1), 300.0))
        .unwrap();
    tracker
        .mark_sold(b.id, common::sale(150.0, Some("Vinted"), common::date(2024, 6, 2), 50.0))
        .unwrap();

    let summary = tracker.reports().summary();
    assert_eq!(summary.total_profit, 350.0);
    assert_eq!(summary.total_sales, 650.0);
    assert_eq!(summary.total_cost, 300.0);
    assert_eq!(summary.sold_count, 2);
    assert_eq!(summary.active_count, 1);
    // 350 / 650 * 100
    assert!((summary.margin - 53.846153846).abs() < 1e-6);
}

#[test]
fn margin_is_zero_when_nothing_sold() {
    let (mut tracker, _tmp) = common::setup_tracker();
    tracker.add_item(common::draft("unsold", 40.0)).unwrap();

    let summary = tracker.reports().summary();
    assert_eq!(summary.margin, 0.0);
    assert_eq!(summary.total_sales, 0.0);
    assert_eq!(summary.sold_count, 0);
    assert_eq!(summary.active_count, 1);
}

#[test]
fn summary_of_empty_collection_is_all_zero() {
    let (tracker, _tmp) = common::setup_tracker();

    let summary = tracker.reports().summary();
    assert_eq!(summary.total_profit, 0.0);
    assert_eq!(summary.total_sales, 0.0);
    assert_eq!(summary.total_cost, 0.0);
    assert_eq!(summary.margin, 0.0);
    assert_eq!(summary.sold_count, 0);
    assert_eq!(summary.active_count, 0);
}

// ---------------------------------------------------------------------------
// sales_by_platform
// ---------------------------------------------------------------------------

#[test]
fn groups_sold_items_by_platform() {
    let (mut tracker, _tmp) = common::setup_tracker();

    for (name, platform) in [
        ("a", Some("Vinted")),
        ("b", Some("Vinted")),
        ("c", Some("eBay")),
        ("d", None),
        ("e", Some("  ")),
    ] {
        let item = tracker.add_item(common::draft(name, 10.0)).unwrap();
        tracker
            .mark_sold(item.id, common::sale(20.0, platform, common::date(2024, 6, 1), 10.0))
            .unwrap();
    }

    let groups = tracker.reports().sales_by_platform();
    assert_eq!(
        groups,
        vec![
            PlatformSales { platform: "Other".to_string(), count: 2 },
            PlatformSales { platform: "Vinted".to_string(), count: 2 },
            PlatformSales { platform: "eBay".to_string(), count: 1 },
        ]
    );
}

#[test]
fn listed_items_do_not_appear_in_platform_groups() {
    let (mut tracker, _tmp) = common::setup_tracker();
    tracker.add_item(common::draft("listed", 10.0)).unwrap();

    assert!(tracker.reports().sales_by_platform().is_empty());
}

// ---------------------------------------------------------------------------
// daily_profit
// ---------------------------------------------------------------------------

#[test]
fn window_has_seven_zero_filled_buckets_oldest_first() {
    let (tracker, _tmp) = common::setup_tracker();

    let end = common::date(2024, 6, 10);
    let window = tracker.reports().daily_profit(end);

    assert_eq!(window.len(), 7);
    assert_eq!(window[0].date, common::date(2024, 6, 4));
    assert_eq!(window[6].date, end);
    assert!(window.iter().all(|day| day.profit == 0.0));
}

#[test]
fn sale_on_end_date_lands_in_last_bucket_only() {
    let (mut tracker, _tmp) = common::setup_tracker();

    let end = common::date(2024, 6, 10);
    let item = tracker.add_item(common::draft("a", 10.0)).unwrap();
    tracker
        .mark_sold(item.id, common::sale(60.0, Some("eBay"), end, 50.0))
        .unwrap();

    let window = tracker.reports().daily_profit(end);
    assert_eq!(window[6].profit, 50.0);
    assert!(window[..6].iter().all(|day| day.profit == 0.0));
}

#[test]
fn sale_ten_days_before_end_lands_in_no_bucket() {
    let (mut tracker, _tmp) = common::setup_tracker();

    let end = common::date(2024, 6, 10);
    let item = tracker.add_item(common::draft("old", 10.0)).unwrap();
    tracker
        .mark_sold(item.id, common::sale(60.0, None, common::date(2024, 5, 31), 50.0))
        .unwrap();

    let window = tracker.reports().daily_profit(end);
    assert!(window.iter().all(|day| day.profit == 0.0));
}

#[test]
fn same_day_sales_accumulate_in_one_bucket() {
    let (mut tracker, _tmp) = common::setup_tracker();

    let end = common::date(2024, 6, 10);
    let day = common::date(2024, 6, 7);
    for profit in [10.0, 15.0, -5.0] {
        let item = tracker.add_item(common::draft("x", 1.0)).unwrap();
        tracker
            .mark_sold(item.id, common::sale(profit + 1.0, None, day, profit))
            .unwrap();
    }

    let window = tracker.reports().daily_profit(end);
    let bucket = window.iter().find(|d| d.date == day).unwrap();
    assert_eq!(bucket.profit, 20.0);
}
