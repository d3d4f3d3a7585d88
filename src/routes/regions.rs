use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::regions::{CreateRegionRequest, RegionDetail},
    error::AppResult,
    extractors::{ValidatedJson, parse_id},
    models::Region,
    services::region_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_regions).post(create_region))
        .route("/{id}", get(get_region))
}

#[utoipa::path(
    get,
    path = "/api/regions",
    responses(
        (status = 200, description = "List regions", body = Vec<Region>)
    ),
    tag = "Regions"
)]
pub async fn list_regions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Region>>> {
    let resp = region_service::list_regions(&state)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/regions/{id}",
    params(
        ("id" = i32, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Region with the products made there", body = RegionDetail),
        (status = 400, description = "Invalid region ID"),
        (status = 404, description = "Region not found"),
    ),
    tag = "Regions"
)]
pub async fn get_region(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RegionDetail>> {
    let id = parse_id(&id, "Invalid region ID")?;
    let resp = region_service::get_region(&state, id)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/regions",
    request_body = CreateRegionRequest,
    responses(
        (status = 201, description = "Create region", body = Region),
        (status = 400, description = "Invalid region data"),
    ),
    tag = "Regions"
)]
pub async fn create_region(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRegionRequest>,
) -> AppResult<(StatusCode, Json<Region>)> {
    let resp = region_service::create_region(&state, payload)?;
    Ok((StatusCode::CREATED, Json(resp)))
}
