use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use bl_core::FieldError;
use serde::Serialize;

use crate::views::pages;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn title(&self) -> String {
        self.status_code()
            .canonical_reason()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Error".to_string())
    }
}

impl From<bl_core::Error> for AppError {
    fn from(err: bl_core::Error) -> Self {
        match err {
            bl_core::Error::NotFound(what) => AppError::NotFound(what),
            bl_core::Error::InvalidValue(msg) => AppError::BadRequest(msg),
            bl_core::Error::Validation(errors) => AppError::Validation(errors),
        }
    }
}

/// Page routes answer with an HTML error page.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!("⚠️ {} -> {}", self, status);
        let body = pages::error(status.as_u16(), &self.title(), &self.to_string());
        (status, Html(body)).into_response()
    }
}

/// RFC 7807 problem details for the JSON API.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    problem_type: Option<String>,
    title: String,
    status: u16,
    detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn from_error(err: &AppError) -> Self {
        let errors = match err {
            AppError::Validation(errors) => errors.clone(),
            _ => Vec::new(),
        };
        Self {
            problem_type: None,
            title: err.title(),
            status: err.status_code().as_u16(),
            detail: err.to_string(),
            errors,
        }
    }
}

/// Wraps [`AppError`] for handlers under `/api`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<bl_core::Error> for ApiError {
    fn from(err: bl_core::Error) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let err: AppError = bl_core::Error::NotFound("article '9'".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let err: AppError = bl_core::Error::Validation(vec![]).into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_problem_details() {
        let err = AppError::NotFound("article '9'".to_string());
        let problem = ErrorResponse::from_error(&err);
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["title"], "Not Found");
        assert_eq!(json["detail"], "Not found: article '9'");
        assert!(json.get("errors").is_none());
    }
}
