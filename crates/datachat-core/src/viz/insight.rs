use indexmap::IndexMap;
use serde_json::Value;

use super::value::parse_date_like;
use crate::record::Record;

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn measure_value(rec: &Record, measure: &str) -> f64 {
    rec.get(measure).and_then(Value::as_f64).unwrap_or(0.0)
}

fn date_key(rec: &Record, column: &str) -> i64 {
    rec.get(column)
        .and_then(Value::as_str)
        .and_then(parse_date_like)
        .map(|dt| dt.and_utc().timestamp())
        // Unparseable cells sort to the front rather than poisoning the sort.
        .unwrap_or(i64::MIN)
}

/// Time-series insight: percent change of the first measure between the
/// earliest and latest row, e.g.
/// `Revenue has increased by 50.0% from 2025-01 to 2025-02`.
///
/// A zero baseline makes the ratio undefined, so the insight is suppressed
/// rather than rendering `inf%` at the user.
pub fn trend(
    records: &[Record],
    dimensions: &[String],
    measures: &[String],
    labels: &IndexMap<String, String>,
) -> Option<String> {
    let probe = records.first()?;
    let time_col = dimensions.iter().find(|d| {
        probe
            .get(d.as_str())
            .and_then(Value::as_str)
            .is_some_and(|s| parse_date_like(s).is_some())
    })?;
    let metric = measures.first()?;

    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by_key(|r| date_key(r, time_col));

    let earliest = *sorted.first()?;
    let latest = *sorted.last()?;
    let baseline = measure_value(earliest, metric);
    if baseline == 0.0 {
        return None;
    }

    let change = (measure_value(latest, metric) - baseline) / baseline * 100.0;
    let direction = if change >= 0.0 { "increased" } else { "decreased" };
    let label = labels.get(metric).cloned().unwrap_or_else(|| metric.clone());

    Some(format!(
        "{} has {} by {:.1}% from {} to {}",
        label,
        direction,
        change.abs(),
        display(earliest.get(time_col.as_str())?),
        display(latest.get(time_col.as_str())?),
    ))
}

/// Ranking/percentage insight: top and bottom rows by the first measure, e.g.
/// `Email leads with 57.0%, while Display shows 26.7%`. The `%` suffix only
/// appears when a rate/percentage column triggered the branch, not a rank.
pub fn extremes(
    records: &[Record],
    dimensions: &[String],
    measures: &[String],
    percent: bool,
) -> Option<String> {
    let dimension = dimensions.first()?;
    let metric = measures.first()?;

    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by(|a, b| measure_value(b, metric).total_cmp(&measure_value(a, metric)));

    let top = *sorted.first()?;
    let bottom = *sorted.last()?;
    let suffix = if percent { "%" } else { "" };

    Some(format!(
        "{} leads with {}{}, while {} shows {}{}",
        display(top.get(dimension.as_str())?),
        display(top.get(metric.as_str())?),
        suffix,
        display(bottom.get(dimension.as_str())?),
        display(bottom.get(metric.as_str())?),
        suffix,
    ))
}
