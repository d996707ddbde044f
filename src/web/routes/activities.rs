use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::database::activities_repo::ActivityStore;
use crate::models::ActivityMap;
use crate::services::activities_service;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = required_email(&query)?;
    activities_service::signup(&store, &activity_name, email)
        .map(|message| Json(MessageResponse { message }))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            ApiError::from(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = required_email(&query)?;
    activities_service::unregister(&store, &activity_name, email)
        .map(|message| Json(MessageResponse { message }))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            ApiError::from(e)
        })
}

fn required_email(query: &EmailQuery) -> Result<&str, ApiError> {
    if query.email.trim().is_empty() {
        return Err(ApiError::BadRequest("Email is required".to_string()));
    }
    Ok(query.email.as_str())
}
