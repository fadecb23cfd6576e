use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    controller::util::{csrf::validate_login_csrf, guard},
    error::Error,
    model::{
        api::{ErrorDto, UserDto},
        app::AppState,
        session::{AuthLoginCsrf, SessionUserId},
    },
    service::{
        auth::{callback::CallbackService, login::login_service},
        user::UserService,
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Login route to initiate login with EVE Online
///
/// Creates a URL to login with EVE Online and redirects the user to that URL
/// to begin the login process.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the EVE Online SSO login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let scopes = eve_esi::ScopeBuilder::new().build();

    let login = login_service(&state.esi_client, scopes)?;

    AuthLoginCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route the user is redirected to after logging in at EVE Online
///
/// Validates the CSRF state and token, then binds the session to the resolved
/// user. Logged-in users calling this link the character as an alt instead.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Successful login, redirect to the application"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let callback_service = CallbackService::new(&state.db, &state.esi_client);

    validate_login_csrf(&session, &params.0.state).await?;

    let maybe_user_id = SessionUserId::get(&session).await?;

    let user_id = callback_service
        .handle_callback(&params.0.code, maybe_user_id)
        .await?;

    if maybe_user_id.is_none() {
        SessionUserId::insert(&session, user_id).await?;
    }

    Ok(Redirect::temporary("/"))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Successfully logged out, redirect to the login route"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear the session if there is actually a user in it; clearing a
    // session that was never stored answers with a 500.
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/api/auth/login"))
}

/// Get the logged in user's identity
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged in user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = guard::require_user(&state.db, &session).await?;

    let user = UserService::new(&state.db)
        .get_user(user.id)
        .await?
        .ok_or(Error::NotFound("User"))?;

    Ok(Json(user))
}
