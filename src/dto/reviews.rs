use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    extractors::Payload,
    models::{NewReview, Review, ReviewAuthor},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub user_id: i32,
    pub product_id: i32,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Payload for CreateReviewRequest {
    const INVALID: &'static str = "Invalid review data";
}

impl From<CreateReviewRequest> for NewReview {
    fn from(req: CreateReviewRequest) -> Self {
        Self {
            user_id: req.user_id,
            product_id: req.product_id,
            rating: req.rating,
            comment: req.comment,
            created_at: req.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// A review with the public part of its author; `user` is null when the
/// author no longer resolves.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewWithAuthor {
    #[serde(flatten)]
    pub review: Review,
    pub user: Option<ReviewAuthor>,
}
