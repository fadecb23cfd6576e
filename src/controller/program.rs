use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::guard,
    error::Error,
    model::{
        api::{
            AddProgramItemDto, AddProgramLocationDto, CalculateDto, CalculationDto,
            CreateProgramDto, ErrorDto, ProgramDetailDto, ProgramDto,
        },
        app::AppState,
    },
    service::buyback::{calculator::CalculatorService, program::ProgramService},
};

pub static PROGRAM_TAG: &str = "program";

/// List all buyback programs
#[utoipa::path(
    get,
    path = "/api/programs",
    tag = PROGRAM_TAG,
    responses(
        (status = 200, description = "All buyback programs", body = Vec<ProgramDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_programs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    guard::require_user(&state.db, &session).await?;

    let programs = ProgramService::new(&state.db).get_programs().await?;

    Ok(Json(programs))
}

/// Create a buyback program
#[utoipa::path(
    post,
    path = "/api/programs",
    tag = PROGRAM_TAG,
    request_body = CreateProgramDto,
    responses(
        (status = 201, description = "Program created", body = ProgramDetailDto),
        (status = 400, description = "Invalid program name", body = ErrorDto),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 404, description = "Corporation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_program(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateProgramDto>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let program_service = ProgramService::new(&state.db);

    let program = program_service.create_program(dto).await?;
    let detail = program_service.get_program(program.id).await?;

    Ok((StatusCode::CREATED, Json(detail)))
}

/// Get a program with its accepted items and locations
#[utoipa::path(
    get,
    path = "/api/programs/{id}",
    tag = PROGRAM_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    responses(
        (status = 200, description = "Program detail", body = ProgramDetailDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_program(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    guard::require_user(&state.db, &session).await?;

    let detail = ProgramService::new(&state.db).get_program(id).await?;

    Ok(Json(detail))
}

/// Delete a buyback program
#[utoipa::path(
    delete,
    path = "/api/programs/{id}",
    tag = PROGRAM_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    responses(
        (status = 204, description = "Program deleted"),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_program(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    ProgramService::new(&state.db).delete_program(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add an item to a program, or update the existing entry
#[utoipa::path(
    post,
    path = "/api/programs/{id}/items",
    tag = PROGRAM_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    request_body = AddProgramItemDto,
    responses(
        (status = 200, description = "Program detail after the change", body = ProgramDetailDto),
        (status = 400, description = "Brokerage out of range", body = ErrorDto),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 404, description = "Program or item type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_program_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<AddProgramItemDto>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let program_service = ProgramService::new(&state.db);

    program_service.add_item(id, dto).await?;
    let detail = program_service.get_program(id).await?;

    Ok(Json(detail))
}

/// Remove an item from a program
#[utoipa::path(
    delete,
    path = "/api/programs/{id}/items/{type_id}",
    tag = PROGRAM_TAG,
    params(
        ("id" = i32, Path, description = "Program ID"),
        ("type_id" = i64, Path, description = "EVE Online type ID")
    ),
    responses(
        (status = 200, description = "Program detail after the change", body = ProgramDetailDto),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 404, description = "Program item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_program_item(
    State(state): State<AppState>,
    session: Session,
    Path((id, type_id)): Path<(i32, i64)>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let program_service = ProgramService::new(&state.db);

    program_service.remove_item(id, type_id).await?;
    let detail = program_service.get_program(id).await?;

    Ok(Json(detail))
}

/// Enable an office as a drop-off location for a program
#[utoipa::path(
    post,
    path = "/api/programs/{id}/locations",
    tag = PROGRAM_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    request_body = AddProgramLocationDto,
    responses(
        (status = 200, description = "Program detail after the change", body = ProgramDetailDto),
        (status = 400, description = "Office belongs to another corporation", body = ErrorDto),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 404, description = "Program or office not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_program_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<AddProgramLocationDto>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let program_service = ProgramService::new(&state.db);

    program_service.add_location(id, dto).await?;
    let detail = program_service.get_program(id).await?;

    Ok(Json(detail))
}

/// Disable a drop-off location for a program
#[utoipa::path(
    delete,
    path = "/api/programs/{id}/locations/{program_location_id}",
    tag = PROGRAM_TAG,
    params(
        ("id" = i32, Path, description = "Program ID"),
        ("program_location_id" = i32, Path, description = "Program location ID")
    ),
    responses(
        (status = 200, description = "Program detail after the change", body = ProgramDetailDto),
        (status = 403, description = "Manager role required", body = ErrorDto),
        (status = 404, description = "Program location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_program_location(
    State(state): State<AppState>,
    session: Session,
    Path((id, program_location_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    guard::require_manager(&state.db, &session).await?;

    let program_service = ProgramService::new(&state.db);

    program_service.remove_location(id, program_location_id).await?;
    let detail = program_service.get_program(id).await?;

    Ok(Json(detail))
}

/// Price pasted inventory against a program for review before submitting
#[utoipa::path(
    post,
    path = "/api/programs/{id}/calculate",
    tag = PROGRAM_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    request_body = CalculateDto,
    responses(
        (status = 200, description = "Computed quote", body = CalculationDto),
        (status = 400, description = "Location does not belong to the program", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn calculate(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<CalculateDto>,
) -> Result<impl IntoResponse, Error> {
    guard::require_user(&state.db, &session).await?;

    let calculation = CalculatorService::new(&state.db)
        .calculate(id, dto.program_location, &dto.text)
        .await?;

    Ok(Json(calculation))
}
