use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of endpoints that only report an outcome, e.g. removing a cart row.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
