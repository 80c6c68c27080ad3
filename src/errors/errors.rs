//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 인증 흐름의 실패(중복 사용자명, 잘못된 자격 증명, OAuth 실패)는 핸들러에서
//! 폼으로의 리다이렉트로 변환되고, 나머지 에러는 여기서 정의한 HTTP 상태 코드와
//! JSON 본문으로 응답됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `InvalidCredentials` | 401 Unauthorized |
//! | `OAuthFailure` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `DuplicateUsername` | 409 Conflict |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `SessionError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find(id: &str) -> Result<User, AppError> {
//!     store.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// 이미 사용 중인 사용자명으로 가입 시도
    #[error("Duplicate username: {0}")]
    DuplicateUsername(String),

    /// 사용자명 또는 비밀번호 불일치
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 프로바이더 거부, state 불일치, 토큰 교환/프로필 조회 실패
    #[error("OAuth failure: {0}")]
    OAuthFailure(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Session store error: {0}")]
    SessionError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 사용자가 폼으로 되돌아가야 하는 인증 흐름상의 실패인지 확인
    ///
    /// 저장소 장애 등 서버 측 문제는 `false`를 반환하며 그대로 에러 응답이 됩니다.
    pub fn is_auth_flow_failure(&self) -> bool {
        matches!(
            self,
            AppError::DuplicateUsername(_)
                | AppError::InvalidCredentials
                | AppError::OAuthFailure(_)
                | AppError::ValidationError(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::OAuthFailure(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateUsername(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러를 설명과 함께 `InternalError`로 변환합니다
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_duplicate_username_response() {
        let error = AppError::DuplicateUsername("alice".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_credentials_response() {
        let response = AppError::InvalidCredentials.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_persistence_errors_are_internal() {
        let db = AppError::DatabaseError("connection refused".to_string());
        let session = AppError::SessionError("redis down".to_string());

        assert_eq!(db.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(session.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_auth_flow_failure_classification() {
        assert!(AppError::DuplicateUsername("bob".to_string()).is_auth_flow_failure());
        assert!(AppError::InvalidCredentials.is_auth_flow_failure());
        assert!(AppError::OAuthFailure("denied".to_string()).is_auth_flow_failure());
        assert!(AppError::ValidationError("empty".to_string()).is_auth_flow_failure());

        assert!(!AppError::DatabaseError("down".to_string()).is_auth_flow_failure());
        assert!(!AppError::SessionError("down".to_string()).is_auth_flow_failure());
        assert!(!AppError::InternalError("boom".to_string()).is_auth_flow_failure());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
