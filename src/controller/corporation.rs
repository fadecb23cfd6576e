use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::guard,
    data::buyback::corporation::BuybackCorporationRepository,
    error::Error,
    model::{
        api::{CorporationDto, ErrorDto, OfficeDto},
        app::AppState,
        worker::WorkerJob,
    },
    service::buyback::corporation::BuybackCorporationService,
    worker,
};

pub static CORPORATION_TAG: &str = "corporation";

/// List enrolled corporations with their latest office sync status
#[utoipa::path(
    get,
    path = "/api/corporations",
    tag = CORPORATION_TAG,
    responses(
        (status = 200, description = "Enrolled corporations", body = Vec<CorporationDto>),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_corporations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let corporations = BuybackCorporationService::new(&state.db)
        .get_corporations()
        .await?;

    Ok(Json(corporations))
}

/// List the synced offices of an enrolled corporation
#[utoipa::path(
    get,
    path = "/api/corporations/{id}/offices",
    tag = CORPORATION_TAG,
    params(("id" = i32, Path, description = "Enrolled corporation ID")),
    responses(
        (status = 200, description = "Synced offices", body = Vec<OfficeDto>),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 404, description = "Corporation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_corporation_offices(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let offices = BuybackCorporationService::new(&state.db).get_offices(id).await?;

    Ok(Json(offices))
}

/// Queue an office sync for an enrolled corporation
#[utoipa::path(
    post,
    path = "/api/corporations/{id}/sync",
    tag = CORPORATION_TAG,
    params(("id" = i32, Path, description = "Enrolled corporation ID")),
    responses(
        (status = 202, description = "Office sync queued"),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 404, description = "Corporation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_corporation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    BuybackCorporationRepository::new(&state.db)
        .get(id)
        .await?
        .ok_or(Error::NotFound("Corporation"))?;

    let mut storage = state.job_storage.clone();
    worker::enqueue(
        &mut storage,
        WorkerJob::SyncCorporationOffices { corporation_id: id },
    )
    .await?;

    Ok(StatusCode::ACCEPTED)
}
