//! 인증 요청 DTO
//!
//! 로그인, 토큰 갱신, 로그아웃, OAuth 콜백의 요청 데이터 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 사용자 이메일 (소문자로 정규화되어 조회됨)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호
    #[validate(length(min = 1, message = "password은(는) 필수입니다"))]
    pub password: String,
}

/// 토큰 갱신 및 로그아웃 요청 DTO
///
/// `refreshToken` 필드가 본문에서 누락되면 역직렬화 단계에서 400이 됩니다.
/// 로그아웃에서 이것이 유일한 400 경로입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    /// 리프레시 토큰
    #[serde(rename = "refreshToken")]
    #[validate(length(min = 1, message = "refreshToken은(는) 필수입니다"))]
    pub refresh_token: String,
}

/// Google OAuth 콜백 쿼리 파라미터
///
/// 사용자가 동의를 거부하면 `code` 대신 `error`가 전달되므로
/// 모든 필드가 Option입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthCallbackQuery {
    /// 토큰 교환용 authorization code
    pub code: Option<String>,
    /// CSRF 방지용 state
    pub state: Option<String>,
    /// 공급자 측 에러 코드 (예: access_denied)
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_uses_camel_case_field() {
        let request: RefreshTokenRequest =
            serde_json::from_str(r#"{"refreshToken": "token-value"}"#).unwrap();
        assert_eq!(request.refresh_token, "token-value");

        // snake_case 필드는 거부
        let result = serde_json::from_str::<RefreshTokenRequest>(r#"{"refresh_token": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "user@example.com".to_string(),
            password: "secret123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let empty_password = LoginRequest {
            email: "user@example.com".to_string(),
            password: "".to_string(),
        };
        assert!(empty_password.validate().is_err());
    }
}
