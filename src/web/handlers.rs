// POST /summarize and POST /answer.
//
// Request shapes mirror the original API consumers: articles arrive as an
// array of plain strings, the domain is optional, and /summarize may carry
// conversational history. Empty aggregated article text is the caller's
// mistake (400); everything the generation service does wrong is a 500.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::summarize::HistoryEntry;
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub articles: Vec<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub history: Option<Vec<HistoryEntry>>,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub articles: Vec<String>,
    pub summary: String,
    pub question: String,
    #[serde(default)]
    pub domain: Option<String>,
}

#[derive(Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// POST /summarize — summarize the supplied articles.
pub async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<SummarizeRequest>,
) -> Response {
    let aggregated_empty = body.articles.iter().all(|article| article.trim().is_empty());
    if aggregated_empty {
        return api_error(StatusCode::BAD_REQUEST, "No article content provided");
    }

    match state
        .summarizer
        .summarize(
            &body.articles,
            body.domain.as_deref(),
            body.history.as_deref(),
        )
        .await
    {
        Ok(summary) => {
            (StatusCode::OK, Json(SummarizeResponse { summary })).into_response()
        }
        Err(err) => {
            error!(error = %err, "summarization failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate summary")
        }
    }
}

/// POST /answer — answer a follow-up question about a prior summary.
pub async fn answer(State(state): State<AppState>, Json(body): Json<AnswerRequest>) -> Response {
    match state
        .summarizer
        .answer(
            &body.articles,
            &body.summary,
            &body.question,
            body.domain.as_deref(),
        )
        .await
    {
        Ok(answer) => (StatusCode::OK, Json(AnswerResponse { answer })).into_response(),
        Err(err) => {
            error!(error = %err, "question answering failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate answer")
        }
    }
}
