use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    controller::util::guard,
    error::Error,
    model::{
        api::{ErrorDto, ItemSuggestionDto},
        app::AppState,
    },
    service::buyback::program::ProgramService,
};

pub static ITEM_TAG: &str = "item";

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Autocomplete published item types by name substring
///
/// Blueprints are excluded; answers `{value, text}` suggestion pairs for the
/// program item form.
#[utoipa::path(
    get,
    path = "/api/items",
    tag = ITEM_TAG,
    params(("q" = Option<String>, Query, description = "Name substring to match")),
    responses(
        (status = 200, description = "Matching item types", body = Vec<ItemSuggestionDto>),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn item_autocomplete(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let query = params.q.unwrap_or_default();

    let suggestions = ProgramService::new(&state.db).search_items(&query).await?;

    Ok(Json(suggestions))
}
