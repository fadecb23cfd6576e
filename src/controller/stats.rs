use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::guard,
    error::Error,
    model::{
        api::{ContractDto, ErrorDto},
        app::AppState,
    },
    service::buyback::stats::StatsService,
};

pub static STATS_TAG: &str = "stats";

/// Completed trades of the logged in user's characters
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Own completed trades", body = Vec<ContractDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = guard::require_user(&state.db, &session).await?;

    let contracts = StatsService::new(&state.db).my_stats(user.id).await?;

    Ok(Json(contracts))
}

/// Completed trades of a program
#[utoipa::path(
    get,
    path = "/api/programs/{id}/stats",
    tag = STATS_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    responses(
        (status = 200, description = "Program completed trades", body = Vec<ContractDto>),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn program_stats(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let contracts = StatsService::new(&state.db).program_stats(id).await?;

    Ok(Json(contracts))
}
