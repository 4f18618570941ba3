use indexmap::IndexMap;
use thiserror::Error;

use super::insight;
use super::value::CellType;
use super::{ChartKind, VizRecommendation};
use crate::record::Record;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("record {index} does not match the first record's columns (expected [{expected}], found [{found}])")]
    MalformedRecords {
        index: usize,
        expected: String,
        found: String,
    },
}

const TIME_HINTS: &[&str] = &["date", "month", "quarter"];
const PERCENT_HINTS: &[&str] = &["rate", "percentage", "ratio"];
const RANK_HINTS: &[&str] = &["rank", "position"];

fn name_contains_any(name: &str, hints: &[&str]) -> bool {
    let lower = name.to_lowercase();
    hints.iter().any(|hint| lower.contains(hint))
}

/// Classify columns, pick a chart kind and synthesize an insight for one
/// result set.
///
/// Column roles come from the first row only; every later row must carry the
/// same column set (the first row's schema is authoritative, anything else is
/// [`AnalyzeError::MalformedRecords`]). An empty input is not an error and
/// yields the bare `bar` recommendation.
pub fn analyze(records: &[Record]) -> Result<VizRecommendation, AnalyzeError> {
    let Some(first) = records.first() else {
        return Ok(VizRecommendation {
            records: Vec::new(),
            dimensions: Vec::new(),
            measures: Vec::new(),
            recommended_chart: ChartKind::Bar,
            insight: None,
            labels: IndexMap::new(),
        });
    };

    check_homogeneous(records, first)?;

    let mut dimensions = Vec::new();
    let mut measures = Vec::new();
    let mut labels = IndexMap::new();

    for (name, cell) in first {
        if CellType::of(cell).is_measure() {
            measures.push(name.clone());
            labels.insert(name.clone(), label_for(name));
        } else {
            dimensions.push(name.clone());
        }
    }

    let has_time = first.keys().any(|c| name_contains_any(c, TIME_HINTS));
    let has_percent = first.keys().any(|c| name_contains_any(c, PERCENT_HINTS));
    let has_rank = first.keys().any(|c| name_contains_any(c, RANK_HINTS));

    let recommended_chart = if has_time && !measures.is_empty() {
        ChartKind::Line
    } else if dimensions.len() == 1 && measures.len() == 1 && records.len() <= 8 {
        ChartKind::Pie
    } else {
        ChartKind::Bar
    };

    // The two insight branches are mutually exclusive; a time-ish column name
    // claims the result set even when the trend itself cannot be computed.
    let insight = if has_time {
        insight::trend(records, &dimensions, &measures, &labels)
    } else if has_rank || has_percent {
        insight::extremes(records, &dimensions, &measures, has_percent)
    } else {
        None
    };

    Ok(VizRecommendation {
        records: records.to_vec(),
        dimensions,
        measures,
        recommended_chart,
        insight,
        labels,
    })
}

fn check_homogeneous(records: &[Record], first: &Record) -> Result<(), AnalyzeError> {
    for (index, rec) in records.iter().enumerate().skip(1) {
        if rec.len() != first.len() || !rec.keys().all(|k| first.contains_key(k)) {
            return Err(AnalyzeError::MalformedRecords {
                index,
                expected: first.keys().cloned().collect::<Vec<_>>().join(", "),
                found: rec.keys().cloned().collect::<Vec<_>>().join(", "),
            });
        }
    }
    Ok(())
}

/// `avg_order_value` -> `Avg Order Value`.
pub fn label_for(column: &str) -> String {
    column
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
