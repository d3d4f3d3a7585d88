use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    extractors::Payload,
    models::{NewRegion, Product, Region},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl Payload for CreateRegionRequest {
    const INVALID: &'static str = "Invalid region data";
}

impl From<CreateRegionRequest> for NewRegion {
    fn from(req: CreateRegionRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            image_url: req.image_url,
        }
    }
}


/// A region with the products whose `region` names it.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegionDetail {
    #[serde(flatten)]
    pub region: Region,
    pub products: Vec<Product>,
}
