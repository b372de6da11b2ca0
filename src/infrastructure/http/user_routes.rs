//! User API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::UserView;
use crate::application::services::{
    RegisterUserRequest as ServiceRegisterUserRequest,
    UpdateUserRequest as ServiceUpdateUserRequest,
};
use crate::domain::value_objects::UserId;
use crate::infrastructure::state::AppState;

use super::error_response;

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

fn parse_user_id(id: &str) -> Result<UserId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(UserId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid user ID".to_string()))
}

/// List users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserView>> {
    Json(state.facade.read().await.list_users())
}

/// Register a user
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserView>), (StatusCode, String)> {
    let user = state
        .facade
        .write()
        .await
        .register_user(ServiceRegisterUserRequest {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            is_admin: req.is_admin,
        })
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserView>, (StatusCode, String)> {
    let user_id = parse_user_id(&id)?;

    let user = state
        .facade
        .read()
        .await
        .get_user(user_id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "User not found".to_string()))?;

    Ok(Json(user))
}

/// Update a user
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserView>, (StatusCode, String)> {
    let user_id = parse_user_id(&id)?;

    let user = state
        .facade
        .write()
        .await
        .update_user(
            user_id,
            ServiceUpdateUserRequest {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                password: req.password,
                is_admin: req.is_admin,
            },
        )
        .map_err(error_response)?;

    Ok(Json(user))
}

/// Delete a user and everything it owns
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let user_id = parse_user_id(&id)?;

    if state.facade.write().await.delete_user(user_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "User not found".to_string()))
    }
}
