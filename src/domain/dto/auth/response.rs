//! 인증 응답 DTO
//!
//! 로그인/토큰 갱신 응답 구조를 정의합니다. 와이어 필드는 camelCase입니다.

use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenPair;

/// 로그인 및 OAuth 세션 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// 액세스 토큰 (API 접근용)
    pub access_token: String,
    /// 리프레시 토큰 (갱신용)
    pub refresh_token: String,
    /// 인증된 사용자 정보 (민감 필드 제외)
    pub user: UserResponse,
}

impl AuthResponse {
    /// 토큰 쌍과 사용자 엔티티로 응답을 생성합니다.
    pub fn new(tokens: TokenPair, user: User) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: UserResponse::from(user),
        }
    }
}

/// 토큰 갱신 응답 DTO
///
/// 리프레시 토큰 회전으로 두 토큰이 모두 교체됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRefreshResponse {
    /// 새 액세스 토큰
    pub access_token: String,
    /// 새 리프레시 토큰 (이전 토큰은 무효화됨)
    pub refresh_token: String,
}

impl From<TokenPair> for TokenRefreshResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_response_serializes_camel_case() {
        let response = TokenRefreshResponse {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"accessToken\""));
        assert!(json.contains("\"refreshToken\""));
        assert!(!json.contains("access_token"));
    }

    #[test]
    fn test_auth_response_excludes_sensitive_fields() {
        let user = User::new_local(
            "user@example.com".to_string(),
            "tester".to_string(),
            "$2b$04$hash".to_string(),
        );
        let tokens = TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        };

        let json = serde_json::to_string(&AuthResponse::new(tokens, user)).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("refresh_token_hash"));
    }
}
