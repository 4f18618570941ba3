/// A conjunctive keyword rule: every keyword must appear (case-insensitively)
/// in the question for the rule to fire. Rules are data, not code branches;
/// the matcher walks the table top to bottom and the first hit wins.
///
/// Ordering rule: declare more specific rules (larger keyword sets) above any
/// general rule whose keywords are a subset, since there is no specificity
/// scoring to rescue a shadowed rule.
pub struct IntentPattern {
    pub keywords: &'static [&'static str],
    pub query: &'static str,
    pub explanation: &'static str,
}

pub const PATTERNS: &[IntentPattern] = &[
    IntentPattern {
        keywords: &["correlation", "customer acquisition", "lifetime value"],
        query: r#"
WITH customer_metrics AS (
    SELECT c.id,
           c.acquisition_channel,
           r.name AS region,
           COUNT(DISTINCT o.id) AS purchase_count,
           SUM(o.total_amount) AS total_spent,
           AVG(o.total_amount) AS avg_order_value
    FROM customers c
    JOIN orders o ON c.id = o.customer_id
    JOIN regions r ON c.region_id = r.id
    GROUP BY c.id, c.acquisition_channel, r.name
)
SELECT acquisition_channel,
       region,
       COUNT(DISTINCT id) AS customer_count,
       ROUND(AVG(total_spent), 2) AS avg_lifetime_value,
       ROUND(CORR(total_spent, purchase_count), 3) AS purchase_ltv_correlation,
       ROUND(AVG(avg_order_value), 2) AS avg_basket_size,
       RANK() OVER (PARTITION BY region ORDER BY AVG(total_spent) DESC) AS regional_rank
FROM customer_metrics
GROUP BY acquisition_channel, region
ORDER BY region, avg_lifetime_value DESC;
"#,
        explanation: r#"
I've analyzed customer acquisition channels and their relationship with lifetime value across regions. Key findings:

1. Channel effectiveness: how each acquisition channel performs on customer lifetime value
2. Regional patterns: which channels work best in which regions
3. Purchase behavior: correlation between purchase frequency and lifetime value
4. Basket size: how average order value varies with channel and region

The visualization highlights the most effective acquisition strategies for each market.
"#,
    },
    IntentPattern {
        keywords: &["margin", "sales volume", "quarter"],
        query: r#"
WITH quarterly_performance AS (
    SELECT pc.name AS category,
           DATE_TRUNC('quarter', o.order_date) AS quarter,
           SUM(oi.quantity) AS sales_volume,
           SUM(oi.quantity * oi.price) AS revenue,
           SUM(oi.quantity * p.price) AS cost,
           COUNT(DISTINCT rt.id) AS returns
    FROM products p
    JOIN product_categories pc ON p.category_id = pc.id
    JOIN order_items oi ON p.id = oi.product_id
    JOIN orders o ON oi.order_id = o.id
    LEFT JOIN returns rt ON oi.id = rt.order_item_id
    WHERE o.order_date >= DATE_TRUNC('quarter', NOW()) - INTERVAL '2 quarters'
    GROUP BY pc.name, DATE_TRUNC('quarter', o.order_date)
)
SELECT category,
       quarter,
       sales_volume,
       ROUND((revenue - cost) / NULLIF(revenue, 0) * 100, 2) AS margin_percentage,
       ROUND(returns::numeric / NULLIF(sales_volume, 0) * 100, 2) AS return_rate,
       ROUND(revenue - cost, 2) AS gross_profit,
       ROUND(((sales_volume - LAG(sales_volume) OVER w)::numeric
              / NULLIF(LAG(sales_volume) OVER w, 0)) * 100, 2) AS volume_growth
FROM quarterly_performance
WINDOW w AS (PARTITION BY category ORDER BY quarter)
ORDER BY quarter DESC, volume_growth DESC;
"#,
        explanation: r#"
I've identified product categories showing declining margins alongside growing sales volume. The analysis reveals:

1. Margin pressure: categories experiencing margin compression despite growth
2. Volume dynamics: the quarter-over-quarter trade-off between margin and volume
3. Return rates: how product returns eat into profitability
4. Growth patterns: which categories are buying volume at the expense of margin

This helps flag categories that may need pricing adjustments or cost optimization.
"#,
    },
    IntentPattern {
        keywords: &["churn", "indicators"],
        query: r#"
WITH customer_behavior AS (
    SELECT c.id,
           c.acquisition_channel,
           COUNT(DISTINCT o.id) AS total_orders,
           MAX(o.order_date) AS last_purchase_date,
           AVG(o.total_amount) AS avg_order_value,
           COUNT(DISTINCT rt.id) AS return_count,
           COUNT(DISTINCT o.id) FILTER (WHERE o.order_date >= NOW() - INTERVAL '90 days') AS recent_orders
    FROM customers c
    LEFT JOIN orders o ON c.id = o.customer_id
    LEFT JOIN order_items oi ON o.id = oi.order_id
    LEFT JOIN returns rt ON oi.id = rt.order_item_id
    GROUP BY c.id, c.acquisition_channel
)
SELECT acquisition_channel,
       CASE
           WHEN NOW() - last_purchase_date > INTERVAL '90 days' AND total_orders > 1 THEN 'High Risk'
           WHEN recent_orders = 0 AND total_orders > 1 THEN 'Medium Risk'
           WHEN return_count::float / NULLIF(total_orders, 0) > 0.5 THEN 'Low Risk'
           ELSE 'Healthy'
       END AS risk_category,
       COUNT(*) AS customer_count,
       ROUND(AVG(return_count::numeric / NULLIF(total_orders, 0) * 100), 2) AS return_rate,
       ROUND(AVG(avg_order_value), 2) AS historical_avg_order
FROM customer_behavior
GROUP BY acquisition_channel, risk_category
ORDER BY acquisition_channel;
"#,
        explanation: r#"
I've built a churn risk profile that surfaces customers showing early signs of disengagement. The analysis considers:

1. Purchase patterns: changes in order frequency and value
2. Return behavior: unusual increases in product returns
3. Engagement trends: time since last purchase and recent activity
4. Channel-specific patterns: how risk concentrates by acquisition source

This helps identify at-risk customers before they fully churn, enabling proactive retention work.
"#,
    },
    IntentPattern {
        keywords: &["product combinations", "lifetime value"],
        query: r#"
WITH customer_purchases AS (
    SELECT c.id AS customer_id,
           rg.name AS region,
           p1.name AS product1_name,
           p2.name AS product2_name,
           COUNT(DISTINCT o.id) AS purchase_count,
           SUM(o.total_amount) AS total_spent
    FROM customers c
    JOIN orders o ON c.id = o.customer_id
    JOIN regions rg ON c.region_id = rg.id
    JOIN order_items oi1 ON o.id = oi1.order_id
    JOIN products p1 ON oi1.product_id = p1.id
    JOIN order_items oi2 ON o.id = oi2.order_id
    JOIN products p2 ON oi2.product_id = p2.id
    WHERE p1.id < p2.id
    GROUP BY c.id, rg.name, p1.name, p2.name
)
SELECT region,
       product1_name,
       product2_name,
       SUM(1) AS total_customers,
       ROUND(AVG(total_spent), 2) AS avg_customer_value,
       ROUND(AVG(purchase_count), 2) AS avg_purchase_frequency
FROM customer_purchases
GROUP BY region, product1_name, product2_name
HAVING COUNT(DISTINCT customer_id) >= 10
ORDER BY avg_customer_value DESC
LIMIT 20;
"#,
        explanation: r#"
I've analyzed which product combinations drive higher customer lifetime value. The analysis reveals:

1. Product synergies: pairs that correlate with higher customer value
2. Regional variations: how pair effectiveness differs by region
3. Purchase frequency: how often the combinations are bought together

This feeds directly into cross-selling and bundling strategy.
"#,
    },
    IntentPattern {
        keywords: &["revenue", "category", "month"],
        query: r#"
SELECT TO_CHAR(o.order_date, 'YYYY-MM') AS month,
       pc.name AS category,
       SUM(oi.quantity * oi.price) AS revenue
FROM orders o
JOIN order_items oi ON o.id = oi.order_id
JOIN products p ON oi.product_id = p.id
JOIN product_categories pc ON p.category_id = pc.id
GROUP BY month, pc.name
ORDER BY month, revenue DESC;
"#,
        explanation: r#"
I've broken monthly revenue down by product category over the last six months. The trend view shows which categories are driving overall growth and which are flat or declining, so seasonal swings are easy to separate from structural shifts.
"#,
    },
    IntentPattern {
        keywords: &["average order value", "region"],
        query: r#"
SELECT r.name AS region,
       ROUND(AVG(o.total_amount), 2) AS avg_order_value,
       MODE() WITHIN GROUP (ORDER BY p.name) AS top_product,
       COUNT(DISTINCT o.id) AS num_orders
FROM regions r
JOIN customers c ON c.region_id = r.id
JOIN orders o ON o.customer_id = c.id
JOIN order_items oi ON oi.order_id = o.id
JOIN products p ON p.id = oi.product_id
GROUP BY r.name
ORDER BY avg_order_value DESC;
"#,
        explanation: r#"
I've compared average order value across regions, along with each region's best-selling product and total order count. This shows where customers spend the most per order and which regional assortments are pulling their weight.
"#,
    },
    IntentPattern {
        keywords: &["retention", "channel"],
        query: r#"
WITH cohorts AS (
    SELECT c.acquisition_channel,
           COUNT(DISTINCT c.id) AS total_customers,
           COUNT(DISTINCT c.id) FILTER (
               WHERE EXISTS (
                   SELECT 1 FROM orders o
                   WHERE o.customer_id = c.id
                     AND o.order_date >= NOW() - INTERVAL '90 days'
               )
           ) AS retained_customers
    FROM customers c
    GROUP BY c.acquisition_channel
)
SELECT acquisition_channel,
       total_customers,
       retained_customers,
       ROUND(retained_customers::numeric / NULLIF(total_customers, 0) * 100, 1) AS retention_rate
FROM cohorts
ORDER BY retention_rate DESC;
"#,
        explanation: r#"
I've measured 90-day customer retention by acquisition channel. Channels that bring in customers who keep buying are worth more than their raw volume suggests, so this ranking is a better guide for marketing spend than acquisition counts alone.
"#,
    },
    IntentPattern {
        keywords: &["return rate"],
        query: r#"
SELECT p.name AS product,
       COUNT(rt.id) AS returns,
       COUNT(oi.id) AS total_sold,
       ROUND(COUNT(rt.id)::numeric / NULLIF(COUNT(oi.id), 0) * 100, 1) AS return_rate
FROM products p
JOIN order_items oi ON oi.product_id = p.id
LEFT JOIN returns rt ON rt.order_item_id = oi.id
GROUP BY p.name
ORDER BY return_rate DESC
LIMIT 10;
"#,
        explanation: r#"
I've ranked products by return rate. Products at the top of this list are the first place to look for quality issues, misleading listings, or sizing problems, since their returns are far above the catalog average.
"#,
    },
    IntentPattern {
        keywords: &["revenue", "trend"],
        query: r#"
SELECT TO_CHAR(o.order_date, 'YYYY-MM') AS month,
       SUM(o.total_amount) AS revenue
FROM orders o
GROUP BY month
ORDER BY month;
"#,
        explanation: r#"
I've pulled total revenue by month so the overall trajectory is visible at a glance. The line makes it easy to spot acceleration, plateaus, or seasonal dips in topline performance.
"#,
    },
];
