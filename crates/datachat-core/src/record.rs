use indexmap::IndexMap;
use serde_json::Value;

/// One result row: column name to scalar cell, in select-list order.
/// `IndexMap` keeps the executor's column order intact, which the analyzer
/// relies on when it picks "the first" dimension or measure.
pub type Record = IndexMap<String, Value>;

/// Build a row from `(column, cell)` pairs, preserving their order.
pub fn record(cells: &[(&str, Value)]) -> Record {
    cells
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}
