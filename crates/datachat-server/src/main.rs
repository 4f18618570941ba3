use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use datachat_core::exec::mock::MockExecutor;
use datachat_core::exec::QueryExecutor;
use datachat_core::intent;
use datachat_core::schema::{catalog_info, retail_catalog, CatalogInfo, TableDef};
use datachat_core::session::{HistoryItem, Message, Sender, Session};
use datachat_core::viz::{self, VizRecommendation};

const FALLBACK_ANSWER: &str = "I'm not sure how to answer that yet. Try asking about revenue trends, \
     retention by channel, return rates, regional order values, or margins by quarter.";

#[derive(Clone)]
struct AppState {
    session: Arc<Mutex<Session>>,
    executor: Arc<MockExecutor>,
}

#[derive(Debug, Deserialize)]
struct AskRequest {
    question: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AskResponse {
    answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sql_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<VizRecommendation>,
}

#[derive(Debug, Serialize)]
struct SchemaResponse {
    info: CatalogInfo,
    tables: Vec<TableDef>,
}

async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, String)> {
    let now = chrono::Utc::now().timestamp_millis();
    let classification = intent::classify(&req.question);

    let mut session = state.session.lock().expect("session lock");
    session.push_message(Message {
        sender: Sender::User,
        content: req.question.clone(),
        timestamp: now,
        sql_query: None,
        data: None,
    });

    // No intent matched: a degrade-gracefully reply, never an execution.
    if classification.is_empty() {
        tracing::info!(question = %req.question, "no intent matched");
        session.push_message(Message {
            sender: Sender::Agent,
            content: FALLBACK_ANSWER.to_string(),
            timestamp: now,
            sql_query: None,
            data: None,
        });
        return Ok(Json(AskResponse {
            answer: FALLBACK_ANSWER.to_string(),
            sql_query: None,
            data: None,
        }));
    }

    let records = state.executor.execute(&classification.query).map_err(|e| {
        tracing::error!("query execution failed: {e}");
        (StatusCode::BAD_GATEWAY, e.to_string())
    })?;

    let data = viz::analyze(&records).map_err(|e| {
        tracing::error!("result analysis failed: {e}");
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    session.push_message(Message {
        sender: Sender::Agent,
        content: classification.explanation.clone(),
        timestamp: now,
        sql_query: Some(classification.query.clone()),
        data: Some(data.clone()),
    });
    session.record(HistoryItem {
        question: req.question,
        answer: classification.explanation.clone(),
        sql_query: classification.query.clone(),
        data: data.clone(),
        timestamp: now,
    });

    Ok(Json(AskResponse {
        answer: classification.explanation,
        sql_query: Some(classification.query),
        data: Some(data),
    }))
}

async fn schema() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        info: catalog_info(),
        tables: retail_catalog(),
    })
}

async fn history(State(state): State<AppState>) -> Json<Vec<HistoryItem>> {
    let session = state.session.lock().expect("session lock");
    Json(session.history().to_vec())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().init();

    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("{}:{}", host, port);

    let state = AppState {
        session: Arc::new(Mutex::new(Session::new())),
        executor: Arc::new(MockExecutor),
    };

    let app = Router::new()
        .route("/ask", post(ask))
        .route("/schema", get(schema))
        .route("/history", get(history))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("server running on {bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
