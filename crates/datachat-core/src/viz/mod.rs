pub mod analyze;
pub mod insight;
pub mod value;

pub use self::analyze::{analyze, AnalyzeError};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// Everything the presentation layer needs to render one result set.
///
/// Constructed once per query result and immutable afterwards; it is stored
/// verbatim inside history entries, so it must stay plain serializable data
/// with no live handles. Wire field names match the chat frontend
/// (`recommendedChart` etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VizRecommendation {
    pub records: Vec<Record>,
    pub dimensions: Vec<String>,
    pub measures: Vec<String>,
    pub recommended_chart: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
    /// Display label per measure column; dimensions get none.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub labels: IndexMap<String, String>,
}
