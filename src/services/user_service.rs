use crate::{
    dto::users::{ArtisanDetail, CreateUserRequest, UpdateUserRequest},
    error::{AppError, AppResult},
    models::{NewUser, PublicUser},
    state::AppState,
};

pub fn get_user(state: &AppState, id: i32) -> AppResult<PublicUser> {
    let user = state
        .storage
        .get_user(id)
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(PublicUser::from(user))
}

pub fn create_user(state: &AppState, payload: CreateUserRequest) -> AppResult<PublicUser> {
    if state.storage.get_user_by_username(&payload.username).is_some() {
        return Err(AppError::conflict("Username already exists"));
    }

    let user = state.storage.create_user(NewUser::from(payload));
    tracing::info!(user_id = user.id, artisan = user.is_artisan, "user created");

    Ok(PublicUser::from(user))
}

pub fn update_user(
    state: &AppState,
    id: i32,
    payload: UpdateUserRequest,
) -> AppResult<PublicUser> {
    if state.storage.get_user(id).is_none() {
        return Err(AppError::not_found("User not found"));
    }
    if let Some(username) = payload.username.as_deref() {
        let taken = state
            .storage
            .get_user_by_username(username)
            .is_some_and(|other| other.id != id);
        if taken {
            return Err(AppError::conflict("Username already exists"));
        }
    }

    let user = state
        .storage
        .update_user(id, payload.into())
        .ok_or_else(|| AppError::not_found("User not found"))?;
    tracing::info!(user_id = user.id, "user updated");

    Ok(PublicUser::from(user))
}

pub fn list_artisans(state: &AppState) -> AppResult<Vec<PublicUser>> {
    Ok(state
        .storage
        .get_artisans()
        .into_iter()
        .map(PublicUser::from)
        .collect())
}

pub fn get_artisan(state: &AppState, id: i32) -> AppResult<ArtisanDetail> {
    let artisan = state
        .storage
        .get_artisan(id)
        .ok_or_else(|| AppError::not_found("Artisan not found"))?;
    let products = state.storage.get_products_by_artisan(artisan.id);

    Ok(ArtisanDetail {
        artisan: PublicUser::from(artisan),
        products,
    })
}
