//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! collected into a unified document served by Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to have the
/// application state attached and the session layer applied.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Freyr", description = "Freyr buyback API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::setup::SETUP_TAG, description = "Corporation setup API routes"),
        (name = controller::corporation::CORPORATION_TAG, description = "Enrolled corporation API routes"),
        (name = controller::program::PROGRAM_TAG, description = "Buyback program API routes"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Notification API routes"),
        (name = controller::item::ITEM_TAG, description = "Item type API routes"),
        (name = controller::stats::STATS_TAG, description = "Statistics API routes"),
        (name = controller::admin::ADMIN_TAG, description = "Reference data administration routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::setup::setup_login))
        .routes(routes!(controller::setup::setup_callback))
        .routes(routes!(controller::corporation::get_corporations))
        .routes(routes!(controller::corporation::get_corporation_offices))
        .routes(routes!(controller::corporation::sync_corporation))
        .routes(routes!(
            controller::program::get_programs,
            controller::program::create_program
        ))
        .routes(routes!(
            controller::program::get_program,
            controller::program::delete_program
        ))
        .routes(routes!(controller::program::add_program_item))
        .routes(routes!(controller::program::remove_program_item))
        .routes(routes!(controller::program::add_program_location))
        .routes(routes!(controller::program::remove_program_location))
        .routes(routes!(controller::program::calculate))
        .routes(routes!(controller::notification::notify))
        .routes(routes!(controller::notification::my_notifications))
        .routes(routes!(controller::notification::program_notifications))
        .routes(routes!(
            controller::notification::remove_notification,
            controller::notification::edit_notification
        ))
        .routes(routes!(controller::item::item_autocomplete))
        .routes(routes!(controller::stats::my_stats))
        .routes(routes!(controller::stats::program_stats))
        .routes(routes!(controller::admin::import_item_types))
        .routes(routes!(controller::admin::refresh_market_prices))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
