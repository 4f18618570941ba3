pub mod patterns;

use serde::{Deserialize, Serialize};

use self::patterns::PATTERNS;

/// Output of the classifier: an opaque SQL payload for the executor and a
/// prose explanation for the chat transcript. Both empty means "no intent
/// matched"; callers render that as an I-don't-understand reply and must not
/// hand the empty query to an executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub query: String,
    pub explanation: String,
}

impl Classification {
    fn none() -> Self {
        Self {
            query: String::new(),
            explanation: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.explanation.is_empty()
    }
}

/// Match a question against the rule table.
///
/// The question is lower-cased once and every rule's keywords are checked as
/// plain substrings; the first rule whose full keyword set is present wins.
/// Declaration order in [`PATTERNS`] is the only precedence there is, so a
/// question satisfying two rules resolves to the earlier one.
pub fn classify(question: &str) -> Classification {
    let normalized = question.to_lowercase();

    for pattern in PATTERNS {
        if pattern.keywords.iter().all(|kw| normalized.contains(kw)) {
            return Classification {
                query: pattern.query.trim().to_string(),
                explanation: pattern.explanation.trim().to_string(),
            };
        }
    }

    Classification::none()
}
