use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::DirectoryError;

/// Failure returned by a JSON handler, rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Directory(DirectoryError),
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Directory(DirectoryError::ActivityNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Directory(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Directory(e) => e.to_string(),
            ApiError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        ApiError::Directory(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(DirectoryError::ActivityNotFound {
            activity: "Nope".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Activity not found");
    }

    #[test]
    fn conflicts_map_to_400() {
        let dup = ApiError::from(DirectoryError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            email: "a@test.com".to_string(),
        });
        let missing = ApiError::from(DirectoryError::NotRegistered {
            activity: "Chess Club".to_string(),
            email: "a@test.com".to_string(),
        });
        assert_eq!(dup.status(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    }
}
