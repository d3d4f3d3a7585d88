use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::users::ArtisanDetail,
    error::AppResult,
    extractors::parse_id,
    models::PublicUser,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_artisans))
        .route("/{id}", get(get_artisan))
}

#[utoipa::path(
    get,
    path = "/api/artisans",
    responses(
        (status = 200, description = "All artisans, without passwords", body = Vec<PublicUser>)
    ),
    tag = "Artisans"
)]
pub async fn list_artisans(State(state): State<AppState>) -> AppResult<Json<Vec<PublicUser>>> {
    let resp = user_service::list_artisans(&state)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/artisans/{id}",
    params(
        ("id" = i32, Path, description = "Artisan (user) ID")
    ),
    responses(
        (status = 200, description = "Artisan with their products", body = ArtisanDetail),
        (status = 400, description = "Invalid artisan ID"),
        (status = 404, description = "Artisan not found"),
    ),
    tag = "Artisans"
)]
pub async fn get_artisan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ArtisanDetail>> {
    let id = parse_id(&id, "Invalid artisan ID")?;
    let resp = user_service::get_artisan(&state, id)?;
    Ok(Json(resp))
}
