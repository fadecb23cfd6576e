use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    controller::util::guard,
    error::Error,
    model::{api::ErrorDto, app::AppState, worker::WorkerJob},
    worker,
};

pub static ADMIN_TAG: &str = "admin";

/// Queue an item type reference-data import
#[utoipa::path(
    post,
    path = "/api/admin/item-types/import",
    tag = ADMIN_TAG,
    responses(
        (status = 202, description = "Import queued"),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_item_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let mut storage = state.job_storage.clone();
    worker::enqueue(&mut storage, WorkerJob::ImportItemTypes).await?;

    Ok(StatusCode::ACCEPTED)
}

/// Queue a reference market price refresh
#[utoipa::path(
    post,
    path = "/api/admin/market-prices/refresh",
    tag = ADMIN_TAG,
    responses(
        (status = 202, description = "Refresh queued"),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_market_prices(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let mut storage = state.job_storage.clone();
    worker::enqueue(&mut storage, WorkerJob::RefreshMarketPrices).await?;

    Ok(StatusCode::ACCEPTED)
}
