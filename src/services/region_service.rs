use crate::{
    dto::regions::{CreateRegionRequest, RegionDetail},
    error::{AppError, AppResult},
    models::{NewRegion, Region},
    state::AppState,
};

pub fn list_regions(state: &AppState) -> AppResult<Vec<Region>> {
    Ok(state.storage.get_regions())
}

/// Products are matched on `product.region == region.name`, not on an id.
pub fn get_region(state: &AppState, id: i32) -> AppResult<RegionDetail> {
    let region = state
        .storage
        .get_region(id)
        .ok_or_else(|| AppError::not_found("Region not found"))?;
    let products = state.storage.get_products_by_region(&region.name);

    Ok(RegionDetail { region, products })
}

pub fn create_region(state: &AppState, payload: CreateRegionRequest) -> AppResult<Region> {
    let region = state.storage.create_region(NewRegion::from(payload));
    tracing::info!(region_id = region.id, name = %region.name, "region created");

    Ok(region)
}
