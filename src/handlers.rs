use crate::errors::AppError;
use crate::gauge::{build_gauge, display_name};
use crate::models::{GaugeResponse, SubmitRequest, SubmitResponse};
use crate::state::AppState;
use crate::ui;
use axum::{extract::State, response::Html, Json};

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn get_gauge(State(state): State<AppState>) -> Result<Json<GaugeResponse>, AppError> {
    let readings = state.sheet.fetch_all().await?;
    Ok(Json(build_gauge(&readings)))
}

pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    if !(1..=5).contains(&payload.level) {
        return Err(AppError::bad_request("pick an emotion temperature between 1 and 5"));
    }

    let name = payload.name.trim();
    state
        .sheet
        .submit(name, payload.level, payload.keywords.trim())
        .await?;

    Ok(Json(SubmitResponse {
        recorded: display_name(Some(name)),
    }))
}
