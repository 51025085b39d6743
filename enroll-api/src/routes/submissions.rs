use axum::{routing::post, Json, Router};
use serde::Serialize;
use tracing::instrument;

use enroll_core::{validate, Submission};

use crate::{app_state::AppState, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit))
}

#[derive(Serialize)]
struct SubmitResponse {
    message: String,
}

#[instrument(name = "POST /submit", skip(body))]
async fn submit(Json(body): Json<Submission>) -> Result<Json<SubmitResponse>, ApiError> {
    validate(&body)?;

    // Nothing is persisted; an accepted submission only leaves a log line.
    tracing::info!("Submission received: {:?}", body);

    Ok(Json(SubmitResponse {
        message: "Submission successful.".to_string(),
    }))
}
