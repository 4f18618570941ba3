//! Conversation and history data shapes. The session controller (the server
//! in this workspace) owns one `Session` per process; both lists are
//! append-only and every stored value is plain serializable data, so a
//! history entry can be replayed without re-running the classifier or the
//! analyzer.

use serde::{Deserialize, Serialize};

use crate::viz::VizRecommendation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub sender: Sender,
    pub content: String,
    /// Milliseconds since the epoch, assigned by the session controller.
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<VizRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub question: String,
    pub answer: String,
    pub sql_query: String,
    pub data: VizRecommendation,
    pub timestamp: i64,
}

#[derive(Debug, Default)]
pub struct Session {
    messages: Vec<Message>,
    history: Vec<HistoryItem>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest first, the transcript order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Newest first, the sidebar order.
    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn record(&mut self, item: HistoryItem) {
        self.history.insert(0, item);
    }

    /// Re-surface a past answer in the transcript from its stored descriptor,
    /// without re-invoking classifier, executor or analyzer.
    pub fn replay(&mut self, item: &HistoryItem, now: i64) {
        self.messages.push(Message {
            sender: Sender::User,
            content: item.question.clone(),
            timestamp: now,
            sql_query: None,
            data: None,
        });
        self.messages.push(Message {
            sender: Sender::Agent,
            content: item.answer.clone(),
            timestamp: item.timestamp,
            sql_query: Some(item.sql_query.clone()),
            data: Some(item.data.clone()),
        });
    }
}
