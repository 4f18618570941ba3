use serde_json::json;

use datachat_core::record::record;
use datachat_core::session::{HistoryItem, Sender, Session};
use datachat_core::viz::analyze;

fn sample_history_item() -> HistoryItem {
    let rows = vec![
        record(&[("month", json!("2025-01")), ("revenue", json!(100))]),
        record(&[("month", json!("2025-02")), ("revenue", json!(150))]),
    ];
    let data = analyze(&rows).expect("analyze");

    HistoryItem {
        question: "How has revenue trended?".to_string(),
        answer: "Revenue is up month over month.".to_string(),
        sql_query: "SELECT month, SUM(total_amount) AS revenue FROM orders GROUP BY month;"
            .to_string(),
        data,
        timestamp: 1_748_736_000_000,
    }
}

#[test]
fn history_items_round_trip_through_json() {
    let item = sample_history_item();

    let wire = serde_json::to_string(&item).expect("serialize");
    let back: HistoryItem = serde_json::from_str(&wire).expect("deserialize");

    assert_eq!(back.question, item.question);
    assert_eq!(back.sql_query, item.sql_query);
    // The descriptor survives verbatim, so replay never needs the analyzer.
    assert_eq!(back.data, item.data);
}

#[test]
fn history_is_newest_first_and_messages_are_append_only() {
    let mut session = Session::new();

    let mut first = sample_history_item();
    first.question = "first".to_string();
    let mut second = sample_history_item();
    second.question = "second".to_string();

    session.record(first);
    session.record(second);

    let questions: Vec<_> = session.history().iter().map(|h| h.question.as_str()).collect();
    assert_eq!(questions, vec!["second", "first"]);
}

#[test]
fn replay_rebuilds_the_transcript_from_the_stored_descriptor() {
    let mut session = Session::new();
    let item = sample_history_item();
    session.record(item.clone());

    session.replay(&item, 1_748_736_100_000);

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[0].content, item.question);
    assert_eq!(messages[1].sender, Sender::Agent);
    assert_eq!(messages[1].sql_query.as_deref(), Some(item.sql_query.as_str()));
    assert_eq!(messages[1].data.as_ref(), Some(&item.data));
}
