use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    profile::dto::{Confirmation, NetworkResponse},
    state::AppState,
    store::{Connection, Profile},
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", post(set_profile).get(get_profile))
}

pub fn network_routes() -> Router<AppState> {
    Router::new().route("/network", post(add_connection).get(get_network))
}

#[instrument(skip(state, profile))]
pub async fn set_profile(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
    Json(profile): Json<Profile>,
) -> Result<Json<Confirmation>, ApiError> {
    if !state.store.set_profile(&email, &profile).await? {
        return Err(ApiError::NotFound("User not found".into()));
    }
    info!(%email, "profile replaced");
    Ok(Json(Confirmation {
        message: "Profile saved".into(),
        email,
    }))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
) -> Result<Json<Profile>, ApiError> {
    let user = state
        .store
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    let profile = user
        .profile
        .ok_or_else(|| ApiError::NotFound("Profile not set".into()))?;
    Ok(Json(profile))
}

/// Appends one connection. Industry and strength are taken as-is; the
/// reference lists are advisory only.
#[instrument(skip(state, connection))]
pub async fn add_connection(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
    Json(connection): Json<Connection>,
) -> Result<Json<Confirmation>, ApiError> {
    if !state.store.add_connection(&email, &connection).await? {
        return Err(ApiError::NotFound("User not found".into()));
    }
    info!(%email, industry = %connection.industry, "connection added");
    Ok(Json(Confirmation {
        message: "Network connection added".into(),
        email,
    }))
}

#[instrument(skip(state))]
pub async fn get_network(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
) -> Result<Json<NetworkResponse>, ApiError> {
    let user = state
        .store
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(NetworkResponse {
        network: user.network,
    }))
}
