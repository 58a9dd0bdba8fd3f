use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { .. } | DomainError::ProductNotFound(_) => {
                AppError::NotFound(e.to_string())
            }
            DomainError::OutOfInventory(_) => AppError::Conflict(e.to_string()),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Storage(msg) => AppError::Internal(msg),
            DomainError::Cancelled => AppError::Internal(e.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = |msg: String| serde_json::json!({ "error": msg });
        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().json(body(self.to_string())),
            AppError::BadRequest(_) => HttpResponse::BadRequest().json(body(self.to_string())),
            AppError::Conflict(_) => HttpResponse::Conflict().json(body(self.to_string())),
            // Backend detail stays in the logs.
            AppError::Internal(_) => HttpResponse::InternalServerError()
                .json(body("Internal server error".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::Entity;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound("order with id 1 not found".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn internal_error_body_hides_detail() {
        let err = AppError::Internal("relation \"orders\" does not exist".to_string());
        let bytes = to_bytes(err.error_response().into_body())
            .await
            .expect("body should be readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["error"], "Internal server error");
    }

    #[test]
    fn internal_error_display() {
        assert_eq!(
            AppError::Internal("msg".to_string()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn domain_not_found_maps_to_app_not_found() {
        let app_err: AppError = DomainError::not_found(Entity::Order, 9).into();
        assert!(matches!(app_err, AppError::NotFound(ref m) if m == "order with id 9 not found"));
    }

    #[test]
    fn domain_product_not_found_maps_to_app_not_found() {
        let app_err: AppError = DomainError::ProductNotFound(3).into();
        assert!(matches!(app_err, AppError::NotFound(_)));
    }

    #[test]
    fn domain_out_of_inventory_maps_to_conflict() {
        let app_err: AppError = DomainError::OutOfInventory(3).into();
        assert_eq!(app_err.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn domain_validation_maps_to_bad_request() {
        let app_err: AppError = DomainError::Validation("limit must be > 0".to_string()).into();
        assert_eq!(app_err.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(app_err.to_string(), "limit must be > 0");
    }

    #[test]
    fn domain_cancelled_maps_to_app_internal() {
        let app_err: AppError = DomainError::Cancelled.into();
        assert!(matches!(app_err, AppError::Internal(ref m) if m == "request cancelled"));
    }

    #[test]
    fn domain_storage_maps_to_app_internal() {
        let app_err: AppError = DomainError::Storage("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
