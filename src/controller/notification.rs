use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    controller::util::guard,
    error::Error,
    model::{
        api::{EditNotificationDto, ErrorDto, NotificationListDto, NotifyDto},
        app::AppState,
    },
    service::buyback::notification::NotificationService,
};

pub static NOTIFICATION_TAG: &str = "notification";

fn default_mine() -> bool {
    true
}

#[derive(Deserialize)]
pub struct ScopeParams {
    /// Operate on the caller's own notification (default) or, for managers,
    /// on any notification.
    #[serde(default = "default_mine")]
    pub mine: bool,
}

/// Submit a computed quote as a notification
///
/// Accepts the calculator result as JSON and stores it verbatim. Answers an
/// empty JSON object on success and 400 on malformed input, an unknown
/// program, or a location outside the program.
#[utoipa::path(
    post,
    path = "/api/programs/{id}/notify",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    request_body = NotifyDto,
    responses(
        (status = 200, description = "Notification stored"),
        (status = 400, description = "Malformed payload or unknown program/location", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn notify(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<NotifyDto>,
) -> Result<impl IntoResponse, Error> {
    let user = guard::require_user(&state.db, &session).await?;

    NotificationService::new(&state.db)
        .notify(id, user.id, dto)
        .await?;

    Ok(Json(serde_json::json!({})))
}

/// List the logged in user's notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Own notifications with item names", body = NotificationListDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = guard::require_user(&state.db, &session).await?;

    let notifications = NotificationService::new(&state.db)
        .my_notifications(user.id)
        .await?;

    Ok(Json(notifications))
}

/// List all notifications submitted to a program
#[utoipa::path(
    get,
    path = "/api/programs/{id}/notifications",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    responses(
        (status = 200, description = "Program notifications with item names", body = NotificationListDto),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn program_notifications(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let notifications = NotificationService::new(&state.db)
        .program_notifications(id)
        .await?;

    Ok(Json(notifications))
}

/// Remove a notification
///
/// With `mine=true` (default) the delete is filtered by ownership, so a
/// non-owner's request removes nothing. With `mine=false` the caller must be
/// a manager.
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID"),
        ("mine" = Option<bool>, Query, description = "Own-notification scope (default true)")
    ),
    responses(
        (status = 204, description = "Notification removed, or nothing matched"),
        (status = 403, description = "Manager role required for mine=false", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_notification(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<ScopeParams>,
) -> Result<impl IntoResponse, Error> {
    let user = guard::require_user(&state.db, &session).await?;

    NotificationService::new(&state.db)
        .remove(id, &user, params.mine)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Move a notification to another drop-off location of the same program
#[utoipa::path(
    put,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID"),
        ("mine" = Option<bool>, Query, description = "Own-notification scope (default true)")
    ),
    request_body = EditNotificationDto,
    responses(
        (status = 204, description = "Notification updated"),
        (status = 400, description = "Location outside the notification's program", body = ErrorDto),
        (status = 403, description = "Manager role required for mine=false", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_notification(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<ScopeParams>,
    Json(dto): Json<EditNotificationDto>,
) -> Result<impl IntoResponse, Error> {
    let user = guard::require_user(&state.db, &session).await?;

    NotificationService::new(&state.db)
        .edit_location(id, &user, params.mine, dto.program_location)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
