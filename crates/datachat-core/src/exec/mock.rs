//! In-memory stand-in for the query backend. Dispatches on recognizable
//! substrings of the incoming SQL and returns fixed result sets shaped like
//! the retail catalog in [`crate::schema`]. Fully deterministic so repeated
//! runs of the same question produce identical answers.

use serde_json::json;

use super::{DataRetrievalError, QueryExecutor};
use crate::record::{record, Record};

pub struct MockExecutor;

impl QueryExecutor for MockExecutor {
    fn execute(&self, query: &str) -> Result<Vec<Record>, DataRetrievalError> {
        if query.trim().is_empty() {
            return Err(DataRetrievalError::EmptyQuery);
        }

        let lower = query.to_lowercase();

        Ok(
            if lower.contains("product_categories pc") && lower.contains("group by month, pc.name")
            {
                revenue_by_category()
            } else if lower.contains("regions r") && lower.contains("avg_order_value") {
                region_performance()
            } else if lower.contains("acquisition_channel") && lower.contains("retention_rate") {
                retention_by_channel()
            } else if lower.contains("return_rate") {
                product_return_rates()
            } else {
                monthly_revenue()
            },
        )
    }
}

fn revenue_by_category() -> Vec<Record> {
    let months = ["2024-12", "2025-01", "2025-02", "2025-03", "2025-04", "2025-05"];
    let categories = [
        ("Electronics", 1.5),
        ("Clothing", 1.2),
        ("Home Goods", 0.9),
        ("Sporting Goods", 0.7),
        ("Beauty", 0.5),
    ];

    let mut rows = Vec::with_capacity(months.len() * categories.len());
    for (i, month) in months.iter().enumerate() {
        let base = 20_000.0 + i as f64 * 2_000.0;
        for (category, multiplier) in categories {
            rows.push(record(&[
                ("month", json!(month)),
                ("category", json!(category)),
                ("revenue", json!((base * multiplier).round() as i64)),
            ]));
        }
    }
    rows
}

fn region_performance() -> Vec<Record> {
    [
        ("Northeast", 128.42, "Premium Headphones", 1425),
        ("West", 115.87, "Wireless Earbuds", 1876),
        ("Southeast", 102.34, "Smart Watch", 1532),
        ("Midwest", 98.56, "Fitness Tracker", 1245),
        ("Southwest", 89.21, "Phone Case", 987),
    ]
    .iter()
    .map(|(region, aov, top_product, num_orders)| {
        record(&[
            ("region", json!(region)),
            ("avg_order_value", json!(aov)),
            ("top_product", json!(top_product)),
            ("num_orders", json!(num_orders)),
        ])
    })
    .collect()
}

fn retention_by_channel() -> Vec<Record> {
    [
        ("Email Marketing", 2547, 1452, 57.0),
        ("Referral", 1853, 985, 53.2),
        ("Organic Search", 3254, 1524, 46.8),
        ("Social Media", 4125, 1850, 44.8),
        ("Paid Search", 2875, 978, 34.0),
        ("Display Ads", 1542, 412, 26.7),
    ]
    .iter()
    .map(|(channel, total, retained, rate)| {
        record(&[
            ("acquisition_channel", json!(channel)),
            ("total_customers", json!(total)),
            ("retained_customers", json!(retained)),
            ("retention_rate", json!(rate)),
        ])
    })
    .collect()
}

fn product_return_rates() -> Vec<Record> {
    [
        ("Economy Bluetooth Speaker", 68, 245, 27.8),
        ("Basic Desk Lamp", 42, 187, 22.5),
        ("Entry-level Fitness Tracker", 57, 312, 18.3),
        ("Generic Phone Case", 83, 523, 15.9),
        ("Standard T-Shirt", 112, 876, 12.8),
        ("Wireless Mouse", 47, 421, 11.2),
        ("USB-C Cable 3-Pack", 31, 348, 8.9),
        ("Premium Headphones", 23, 276, 8.3),
        ("Smartphone Charger", 34, 512, 6.6),
        ("Laptop Sleeve", 19, 394, 4.8),
    ]
    .iter()
    .map(|(product, returns, total_sold, rate)| {
        record(&[
            ("product", json!(product)),
            ("returns", json!(returns)),
            ("total_sold", json!(total_sold)),
            ("return_rate", json!(rate)),
        ])
    })
    .collect()
}

fn monthly_revenue() -> Vec<Record> {
    [
        ("2024-12", 125_000),
        ("2025-01", 132_000),
        ("2025-02", 141_000),
        ("2025-03", 138_000),
        ("2025-04", 156_000),
        ("2025-05", 172_000),
    ]
    .iter()
    .map(|(month, revenue)| {
        record(&[("month", json!(month)), ("revenue", json!(revenue))])
    })
    .collect()
}
