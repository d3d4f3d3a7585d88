use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::reviews::{CreateReviewRequest, ReviewWithAuthor},
    error::AppResult,
    extractors::{ValidatedJson, parse_id},
    services::review_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_review))
        .route("/product/{product_id}", get(list_product_reviews))
}

#[utoipa::path(
    get,
    path = "/api/reviews/product/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Reviews with their authors", body = Vec<ReviewWithAuthor>),
        (status = 400, description = "Invalid product ID"),
    ),
    tag = "Reviews"
)]
pub async fn list_product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<Vec<ReviewWithAuthor>>> {
    let product_id = parse_id(&product_id, "Invalid product ID")?;
    let resp = review_service::list_product_reviews(&state, product_id)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Create review", body = ReviewWithAuthor),
        (status = 400, description = "Invalid review data"),
        (status = 404, description = "Product or user not found"),
    ),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewWithAuthor>)> {
    let resp = review_service::create_review(&state, payload)?;
    Ok((StatusCode::CREATED, Json(resp)))
}
