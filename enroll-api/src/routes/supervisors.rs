use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{app_state::AppState, domain::sorted_display_roster, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_supervisors))
}

#[instrument(name = "GET /supervisors", skip(app_state))]
async fn get_supervisors(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let records = app_state.directory_client().fetch_supervisors().await?;

    Ok(Json(sorted_display_roster(records)))
}
