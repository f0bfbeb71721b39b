//! # Application Error Handling
//!
//! 소셜 서비스 백엔드의 통합 에러 타입을 정의합니다.
//! `thiserror` 기반의 `AppError` 열거형 하나로 모든 계층의 실패를 표현하며,
//! `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 자동 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 DTO 검증 실패, 잘못된 ObjectId |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 토큰 만료/위조, 리프레시 실패 |
//! | `AuthorizationError` | 403 Forbidden | 접근 권한 부족 |
//! | `NotFound` | 404 Not Found | 사용자/게시물 없음 |
//! | `ConflictError` | 409 Conflict | 이메일/사용자명 중복 |
//! | 나머지 전부 | 500 Internal Server Error | DB, Redis, 외부 API, 시스템 오류 |
//!
//! 모든 에러 응답 본문은 `{"error": "<message>"}` 형식을 따릅니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn like_post(&self, user_id: &str, post_id: &str) -> AppResult<LikeStatusResponse> {
//!     let post = self.post_repo.find_by_id(post_id).await?
//!         .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증/세션 코어와 좋아요 원장에서 발생할 수 있는 모든 에러를 포괄합니다.
/// 핸들러가 이 타입을 그대로 반환하면 Actix-Web이 적절한 상태 코드와
/// JSON 본문으로 변환합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 실패 (연결, 쿼리, 인덱스 등)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 연산 실패
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 실패 (필수 필드 누락, 형식 오류, 잘못된 ObjectId)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청된 리소스가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 데이터 또는 비즈니스 규칙 충돌 (중복 이메일 등)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패
    ///
    /// 로그인 자격 증명 불일치, 토큰 만료/위조, 리프레시 토큰 회전 실패가
    /// 모두 여기에 속합니다. 공격자에게 실패 원인을 구분할 단서를 주지
    /// 않도록 호출부에서 동일한 메시지를 사용하는 경우가 많습니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 인증은 되었으나 해당 작업에 대한 권한이 없음
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 호출 실패 (Google OAuth 토큰 교환, userinfo 조회 등)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 예상하지 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 에러 변형을 상태 코드로 매핑하고 `{"error": message}` 본문을 만듭니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let options = ClientOptions::parse(&uri).await
///     .context("MongoDB URI 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("content은(는) 필수입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("게시물을 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 사용 중인 이메일입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("접근 권한이 부족합니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_infrastructure_errors_map_to_500() {
        let errors = [
            AppError::DatabaseError("connection refused".to_string()),
            AppError::RedisError("timeout".to_string()),
            AppError::ExternalServiceError("google unavailable".to_string()),
            AppError::InternalError("unexpected".to_string()),
        ];

        for error in errors {
            assert_eq!(
                error.error_response().status(),
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
