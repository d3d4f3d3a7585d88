use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::{AppError, AppResult},
    models::{NewProduct, Product},
    response::MessageResponse,
    state::AppState,
};

pub fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    Ok(state.storage.get_products())
}

pub fn list_featured(state: &AppState) -> AppResult<Vec<Product>> {
    Ok(state.storage.get_featured_products())
}

pub fn list_by_category(state: &AppState, category: &str) -> AppResult<Vec<Product>> {
    Ok(state.storage.get_products_by_category(category))
}

pub fn list_by_region(state: &AppState, region: &str) -> AppResult<Vec<Product>> {
    Ok(state.storage.get_products_by_region(region))
}

pub fn search_products(state: &AppState, query: Option<&str>) -> AppResult<Vec<Product>> {
    let query = query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::bad_request("Search query is required"))?;
    Ok(state.storage.search_products(query))
}

pub fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    state
        .storage
        .get_product(id)
        .ok_or_else(|| AppError::not_found("Product not found"))
}

pub fn create_product(state: &AppState, payload: CreateProductRequest) -> AppResult<Product> {
    let product = state.storage.create_product(NewProduct::from(payload));
    tracing::info!(
        product_id = product.id,
        artisan_id = product.artisan_id,
        "product created"
    );

    Ok(product)
}

pub fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<Product> {
    let product = state
        .storage
        .update_product(id, payload.into())
        .ok_or_else(|| AppError::not_found("Product not found"))?;
    tracing::info!(product_id = product.id, "product updated");

    Ok(product)
}

pub fn delete_product(state: &AppState, id: i32) -> AppResult<MessageResponse> {
    if !state.storage.delete_product(id) {
        return Err(AppError::not_found("Product not found"));
    }
    tracing::info!(product_id = id, "product deleted");

    Ok(MessageResponse::new("Product deleted successfully"))
}
