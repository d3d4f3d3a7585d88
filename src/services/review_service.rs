use crate::{
    dto::reviews::{CreateReviewRequest, ReviewWithAuthor},
    error::{AppError, AppResult},
    models::{NewReview, ReviewAuthor},
    state::AppState,
};

pub fn list_product_reviews(state: &AppState, product_id: i32) -> AppResult<Vec<ReviewWithAuthor>> {
    Ok(state
        .storage
        .get_product_reviews(product_id)
        .into_iter()
        .map(|review| {
            let user = state
                .storage
                .get_user(review.user_id)
                .map(|user| ReviewAuthor::from(&user));
            ReviewWithAuthor { review, user }
        })
        .collect())
}

pub fn create_review(
    state: &AppState,
    payload: CreateReviewRequest,
) -> AppResult<ReviewWithAuthor> {
    if state.storage.get_product(payload.product_id).is_none() {
        return Err(AppError::not_found("Product not found"));
    }
    let user = state
        .storage
        .get_user(payload.user_id)
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let review = state.storage.create_review(NewReview::from(payload));
    tracing::info!(
        review_id = review.id,
        product_id = review.product_id,
        rating = review.rating,
        "review created"
    );

    Ok(ReviewWithAuthor {
        review,
        user: Some(ReviewAuthor::from(&user)),
    })
}
