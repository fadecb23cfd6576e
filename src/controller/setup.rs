use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    constant::SETUP_SCOPES,
    controller::{
        auth::CallbackParams,
        util::{csrf::validate_setup_csrf, guard},
    },
    error::Error,
    model::{
        api::{CorporationDto, ErrorDto},
        app::AppState,
        session::SetupLoginCsrf,
        worker::WorkerJob,
    },
    service::{
        auth::login::login_service,
        buyback::{corporation::BuybackCorporationService, setup::SetupService},
    },
    worker,
};

pub static SETUP_TAG: &str = "setup";

/// Begin corporation setup by authorizing a sync character at EVE Online
///
/// Requests the asset, structure, and contract read scopes the office sync
/// needs. Manager only.
#[utoipa::path(
    get,
    path = "/api/setup/login",
    tag = SETUP_TAG,
    responses(
        (status = 307, description = "Redirect to the EVE Online SSO login page"),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn setup_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let scopes = SETUP_SCOPES.iter().map(|scope| scope.to_string()).collect();

    let login = login_service(&state.esi_client, scopes)?;

    SetupLoginCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback completing corporation setup
///
/// Enrolls the sync character's corporation with the captured refresh token
/// and queues the first office sync. Manager only; the character must be a
/// main or alt of the logged in user.
#[utoipa::path(
    get,
    path = "/api/setup/callback",
    tag = SETUP_TAG,
    responses(
        (status = 200, description = "Corporation enrolled, first sync queued", body = CorporationDto),
        (status = 400, description = "CSRF state mismatch or character not owned", body = ErrorDto),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn setup_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let user = guard::require_manager(&state.db, &session).await?;

    validate_setup_csrf(&session, &params.0.state).await?;

    let enrollment = SetupService::new(&state.db, &state.esi_client)
        .handle_callback(&params.0.code, &user)
        .await?;

    let mut storage = state.job_storage.clone();
    worker::enqueue(
        &mut storage,
        WorkerJob::SyncCorporationOffices {
            corporation_id: enrollment.id,
        },
    )
    .await?;

    let corporation = BuybackCorporationService::new(&state.db)
        .get_corporation(enrollment.id)
        .await?
        .ok_or(Error::NotFound("Corporation"))?;

    Ok(Json(corporation))
}
