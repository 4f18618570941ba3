use std::fs;

use serde_json::{json, Value};

use datachat_core::record::{record, Record};
use datachat_core::viz::{analyze, AnalyzeError, ChartKind};

fn load_fixture(name: &str) -> Vec<Record> {
    let path = format!("tests/fixtures/results/{}", name);
    let s = fs::read_to_string(path).expect("fixture read");
    serde_json::from_str(&s).expect("fixture parse")
}

#[test]
fn empty_input_gives_bare_bar_recommendation() {
    let viz = analyze(&[]).expect("analyze empty");
    assert!(viz.records.is_empty());
    assert!(viz.dimensions.is_empty());
    assert!(viz.measures.is_empty());
    assert_eq!(viz.recommended_chart, ChartKind::Bar);
    assert!(viz.insight.is_none());

    insta::assert_json_snapshot!(viz, @r###"
    {
      "records": [],
      "dimensions": [],
      "measures": [],
      "recommendedChart": "bar"
    }
    "###);
}

#[test]
fn month_over_month_revenue_becomes_a_line_with_trend_insight() {
    let rows = vec![
        record(&[("month", json!("2025-01")), ("revenue", json!(100))]),
        record(&[("month", json!("2025-02")), ("revenue", json!(150))]),
    ];

    let viz = analyze(&rows).expect("analyze");
    assert_eq!(viz.dimensions, vec!["month"]);
    assert_eq!(viz.measures, vec!["revenue"]);
    assert_eq!(viz.recommended_chart, ChartKind::Line);
    assert_eq!(
        viz.insight.as_deref(),
        Some("Revenue has increased by 50.0% from 2025-01 to 2025-02")
    );
}

#[test]
fn declining_series_reports_a_decrease() {
    let rows = vec![
        record(&[("month", json!("2025-01")), ("revenue", json!(150))]),
        record(&[("month", json!("2025-02")), ("revenue", json!(100))]),
    ];

    let viz = analyze(&rows).expect("analyze");
    assert_eq!(
        viz.insight.as_deref(),
        Some("Revenue has decreased by 33.3% from 2025-01 to 2025-02")
    );
}

#[test]
fn trend_sorts_rows_by_their_date_value_not_input_order() {
    let rows = vec![
        record(&[("month", json!("2025-02")), ("revenue", json!(150))]),
        record(&[("month", json!("2025-01")), ("revenue", json!(100))]),
    ];

    let viz = analyze(&rows).expect("analyze");
    assert_eq!(
        viz.insight.as_deref(),
        Some("Revenue has increased by 50.0% from 2025-01 to 2025-02")
    );
}

#[test]
fn zero_baseline_suppresses_the_trend_insight() {
    let rows = vec![
        record(&[("month", json!("2025-01")), ("revenue", json!(0))]),
        record(&[("month", json!("2025-02")), ("revenue", json!(50))]),
    ];

    let viz = analyze(&rows).expect("analyze");
    assert_eq!(viz.recommended_chart, ChartKind::Line);
    assert!(viz.insight.is_none(), "percent change from zero is undefined");
}

#[test]
fn single_dimension_single_measure_small_set_becomes_a_pie() {
    let rows = vec![
        record(&[("region", json!("West")), ("avg_order_value", json!(115.87))]),
        record(&[("region", json!("Northeast")), ("avg_order_value", json!(128.42))]),
    ];

    let viz = analyze(&rows).expect("analyze");
    assert_eq!(viz.recommended_chart, ChartKind::Pie);
    // Neither the time nor the rank/rate branch applies here.
    assert!(viz.insight.is_none());
}

#[test]
fn measures_get_labels_and_dimensions_do_not() {
    let rows = load_fixture("region_performance.json");

    let viz = analyze(&rows).expect("analyze");
    assert_eq!(viz.dimensions, vec!["region", "top_product"]);
    assert_eq!(viz.measures, vec!["avg_order_value", "num_orders"]);
    assert_eq!(viz.labels.get("avg_order_value").map(String::as_str), Some("Avg Order Value"));
    assert_eq!(viz.labels.get("num_orders").map(String::as_str), Some("Num Orders"));
    assert!(!viz.labels.contains_key("region"));
    assert!(!viz.labels.contains_key("top_product"));

    // Two dimensions and two measures, no time-ish name: plain bars.
    assert_eq!(viz.recommended_chart, ChartKind::Bar);
    assert!(viz.insight.is_none());
}

#[test]
fn rate_column_triggers_the_percentage_insight() {
    let rows = vec![
        record(&[("channel", json!("Email")), ("retention_rate", json!(57.0))]),
        record(&[("channel", json!("Referral")), ("retention_rate", json!(53.2))]),
        record(&[("channel", json!("Display")), ("retention_rate", json!(26.7))]),
    ];

    let viz = analyze(&rows).expect("analyze");
    assert_eq!(viz.recommended_chart, ChartKind::Pie);
    assert_eq!(
        viz.insight.as_deref(),
        Some("Email leads with 57.0%, while Display shows 26.7%")
    );
}

#[test]
fn percentage_insight_ranks_on_the_first_measure() {
    let rows = load_fixture("retention_by_channel.json");

    let viz = analyze(&rows).expect("analyze");
    assert_eq!(viz.recommended_chart, ChartKind::Bar);
    assert_eq!(
        viz.insight.as_deref(),
        Some("Social Media leads with 4125%, while Display Ads shows 1542%")
    );
}

#[test]
fn rank_column_gets_the_extremes_insight_without_a_percent_sign() {
    let rows = vec![
        record(&[("product", json!("Basic")), ("sales_rank", json!(2))]),
        record(&[("product", json!("Premium")), ("sales_rank", json!(1))]),
    ];

    let viz = analyze(&rows).expect("analyze");
    let insight = viz.insight.expect("rank insight");
    assert_eq!(insight, "Basic leads with 2, while Premium shows 1");
    assert!(!insight.contains('%'));
}

#[test]
fn null_and_text_cells_are_dimensions() {
    let rows = vec![record(&[
        ("note", Value::Null),
        ("label", json!("west")),
        ("value", json!(5)),
    ])];

    let viz = analyze(&rows).expect("analyze");
    assert_eq!(viz.dimensions, vec!["note", "label"]);
    assert_eq!(viz.measures, vec!["value"]);
}

#[test]
fn timestamp_strings_classify_as_dimensions() {
    let rows = vec![
        record(&[("order_date", json!("2025-03-01 09:30:00")), ("total", json!(42.5))]),
        record(&[("order_date", json!("2025-03-02 10:00:00")), ("total", json!(61.0))]),
    ];

    let viz = analyze(&rows).expect("analyze");
    assert_eq!(viz.dimensions, vec!["order_date"]);
    assert_eq!(viz.recommended_chart, ChartKind::Line);
}

#[test]
fn mismatched_row_keys_are_rejected() {
    let rows = vec![
        record(&[("region", json!("West")), ("revenue", json!(10))]),
        record(&[("region", json!("East")), ("profit", json!(4))]),
    ];

    let err = analyze(&rows).unwrap_err();
    match err {
        AnalyzeError::MalformedRecords { index, .. } => assert_eq!(index, 1),
    }
}

#[test]
fn analysis_is_idempotent() {
    let rows = load_fixture("retention_by_channel.json");
    let a = analyze(&rows).expect("first pass");
    let b = analyze(&rows).expect("second pass");
    assert_eq!(a, b);
}
