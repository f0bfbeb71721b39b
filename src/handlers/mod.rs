//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 파싱과 검증만 담당하고 비즈니스 로직은
//! 서비스 싱글톤에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 와이어 규약
//!
//! - 인증 엔드포인트(`/auth`, `/users`): camelCase 토큰 필드
//! - 좋아요 엔드포인트(`/post`): snake_case 필드
//! - 모든 에러 본문: `{"error": "<message>"}`

use crate::core::errors::AppError;
use crate::domain::models::auth::OptionalUser;
use crate::utils::string_utils::validate_required_string;

pub mod auth;
pub mod users;
pub mod posts;
pub mod likes;

/// 좋아요 엔드포인트의 호출자 식별 규칙
///
/// 유효한 액세스 토큰이 있으면 토큰의 사용자가 우선합니다.
/// 토큰이 없으면 요청에 명시된 `user_id`를 사용하고,
/// 둘 다 없으면 400입니다.
pub(crate) fn resolve_caller_id(
    authenticated: OptionalUser,
    explicit_user_id: Option<String>,
) -> Result<String, AppError> {
    if let Some(user) = authenticated.0 {
        return Ok(user.user_id);
    }

    validate_required_string(explicit_user_id.as_deref().unwrap_or(""), "user_id")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::AuthenticatedUser;

    #[test]
    fn test_token_identity_wins_over_explicit_id() {
        let authenticated = OptionalUser(Some(AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
        }));

        let caller = resolve_caller_id(
            authenticated,
            Some("ffffffffffffffffffffffff".to_string()),
        )
        .unwrap();

        assert_eq!(caller, "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_explicit_id_used_without_token() {
        let caller = resolve_caller_id(
            OptionalUser(None),
            Some("507f1f77bcf86cd799439011".to_string()),
        )
        .unwrap();

        assert_eq!(caller, "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_missing_identity_is_rejected() {
        assert!(resolve_caller_id(OptionalUser(None), None).is_err());
        assert!(resolve_caller_id(OptionalUser(None), Some("  ".to_string())).is_err());
    }
}
