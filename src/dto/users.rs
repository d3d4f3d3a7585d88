use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    extractors::Payload,
    models::{NewUser, Product, PublicUser, UserUpdate},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_artisan: Option<bool>,
    pub bio: Option<String>,
    pub region: Option<String>,
}

impl Payload for CreateUserRequest {
    const INVALID: &'static str = "Invalid user data";
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
            name: req.name,
            email: req.email,
            phone_number: req.phone_number,
            address: req.address,
            is_artisan: req.is_artisan.unwrap_or(false),
            bio: req.bio,
            region: req.region,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: Option<String>,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_artisan: Option<bool>,
    pub bio: Option<String>,
    pub region: Option<String>,
}

impl Payload for UpdateUserRequest {
    const INVALID: &'static str = "Invalid user data";
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
            name: req.name,
            email: req.email,
            phone_number: req.phone_number,
            address: req.address,
            is_artisan: req.is_artisan,
            bio: req.bio,
            region: req.region,
        }
    }
}


/// An artisan together with everything they sell.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArtisanDetail {
    #[serde(flatten)]
    pub artisan: PublicUser,
    pub products: Vec<Product>,
}
