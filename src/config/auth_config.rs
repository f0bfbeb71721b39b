//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰, 프론트엔드 리디렉션 등 인증 관련 설정을
//! 관리하는 모듈입니다. 모든 설정은 환경 변수에서 읽어옵니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 이메일/패스워드 기반 전통적인 인증
//! 2. **Google OAuth 2.0**: Google 계정을 통한 소셜 로그인
//! 3. **JWT 토큰**: Stateless 인증을 위한 액세스/리프레시 토큰 쌍
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! # Google OAuth
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/auth/google/callback"
//!
//! # JWT 토큰 (액세스/리프레시 비밀키는 반드시 서로 달라야 합니다)
//! export JWT_ACCESS_SECRET="your-access-token-secret"
//! export JWT_REFRESH_SECRET="your-refresh-token-secret"
//! export JWT_ACCESS_EXPIRATION_MINUTES="15"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//!
//! # OAuth state / 프론트엔드
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! export FRONTEND_URL="http://localhost:5173"
//! ```

use std::env;

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID")
            .expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 서버 사이드에서만 사용되며, 토큰 교환 시 사용됩니다.
    /// 이 값을 로그에 출력하지 마세요.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET")
            .expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// Google Cloud Console의 승인된 리디렉션 URI 목록에 등록되어 있어야 합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .expect("GOOGLE_REDIRECT_URI must be set")
    }

    /// Google OAuth 인증 서버의 인증 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://accounts.google.com/o/oauth2/auth`
    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    /// Google OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://oauth2.googleapis.com/token`
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }
}

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 액세스 토큰과 리프레시 토큰은 **서로 다른 비밀키**로 서명됩니다.
/// 따라서 리프레시 토큰이 액세스 토큰으로 검증에 통과하는 일은 없으며,
/// 그 반대도 마찬가지입니다.
///
/// ## 권장 설정값
///
/// - 액세스 토큰: 15분 (짧게)
/// - 리프레시 토큰: 7일 (회전 정책과 함께 사용)
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 서명용 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며
    /// 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn access_secret() -> String {
        env::var("JWT_ACCESS_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_ACCESS_SECRET not set, using default (not secure for production!)");
                "dev-access-secret".to_string()
            })
    }

    /// 리프레시 토큰 서명용 비밀키를 반환합니다.
    ///
    /// 액세스 토큰 비밀키와 반드시 다른 값을 사용해야 합니다.
    pub fn refresh_secret() -> String {
        env::var("JWT_REFRESH_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_REFRESH_SECRET not set, using default (not secure for production!)");
                "dev-refresh-secret".to_string()
            })
    }

    /// 액세스 토큰의 만료 시간을 분 단위로 반환합니다. 기본값: 15분
    pub fn access_expiration_minutes() -> i64 {
        env::var("JWT_ACCESS_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15)
    }

    /// 리프레시 토큰의 만료 시간을 일 단위로 반환합니다. 기본값: 7일
    ///
    /// 리프레시 토큰은 사용할 때마다 회전되므로, 탈취된 토큰은
    /// 다음 정상 갱신 시점에 무효화됩니다.
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7)
    }
}

/// OAuth 일반 설정을 관리하는 구조체
///
/// CSRF 공격 방지를 위한 state 매개변수 관련 설정을 포함합니다.
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth State 생성용 비밀키를 반환합니다.
    ///
    /// CSRF 공격 방지를 위한 state 매개변수 생성에 사용됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며
    /// 경고 로그가 출력됩니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
                "oauth-state-secret".to_string()
            })
    }
}

/// 프론트엔드 리디렉션 설정
///
/// OAuth 콜백 완료 후 사용자를 돌려보낼 프론트엔드 주소를 관리합니다.
pub struct FrontendConfig;

impl FrontendConfig {
    /// 프론트엔드 베이스 URL을 반환합니다. 기본값: `http://localhost:5173`
    ///
    /// - 성공: `{base}/oauth/callback#access_token=..&refresh_token=..`
    /// - 실패: `{base}/login?error=google`
    pub fn base_url() -> String {
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string())
    }
}

/// 지원하는 OAuth 공급자를 나타내는 열거형
///
/// 사용자 문서의 어느 필드에 공급자 ID가 저장되는지를 추상화합니다.
/// 현재 Google만 실제 엔드포인트가 연결되어 있으며, Facebook은
/// 데이터 모델 수준에서만 표현 가능합니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum OAuthProvider {
    /// Google OAuth 2.0 인증
    Google,
    /// Facebook OAuth 인증 (데이터 모델 지원, 엔드포인트 미연결)
    Facebook,
}

impl OAuthProvider {
    /// 문자열에서 OAuthProvider를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 공급자 이름 (대소문자 무관)
    ///
    /// # 반환값
    ///
    /// * `Ok(OAuthProvider)` - 유효한 공급자인 경우
    /// * `Err(String)` - 지원하지 않는 공급자인 경우
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "facebook" => Ok(OAuthProvider::Facebook),
            _ => Err(format!("Unsupported oauth provider: {}", s)),
        }
    }

    /// OAuthProvider를 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
        }
    }

    /// 이 공급자의 ID가 저장되는 사용자 문서 필드 이름을 반환합니다.
    pub fn id_field(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google_id",
            OAuthProvider::Facebook => "facebook_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_provider_from_string() {
        assert_eq!(
            OAuthProvider::from_str("google").unwrap(),
            OAuthProvider::Google
        );
        assert_eq!(
            OAuthProvider::from_str("facebook").unwrap(),
            OAuthProvider::Facebook
        );

        // 대소문자 무관 테스트
        assert_eq!(
            OAuthProvider::from_str("GOOGLE").unwrap(),
            OAuthProvider::Google
        );
        assert_eq!(
            OAuthProvider::from_str("Facebook").unwrap(),
            OAuthProvider::Facebook
        );

        // 지원하지 않는 공급자 테스트
        assert!(OAuthProvider::from_str("twitter").is_err());
        assert!(OAuthProvider::from_str("unknown").is_err());
    }

    #[test]
    fn test_oauth_provider_as_string() {
        assert_eq!(OAuthProvider::Google.as_str(), "google");
        assert_eq!(OAuthProvider::Facebook.as_str(), "facebook");
    }

    #[test]
    fn test_oauth_provider_roundtrip() {
        let providers = ["google", "facebook"];

        for &provider_str in &providers {
            let provider = OAuthProvider::from_str(provider_str).unwrap();
            assert_eq!(provider.as_str(), provider_str);
        }
    }

    #[test]
    fn test_oauth_provider_id_field() {
        assert_eq!(OAuthProvider::Google.id_field(), "google_id");
        assert_eq!(OAuthProvider::Facebook.id_field(), "facebook_id");
    }

    #[test]
    fn test_oauth_provider_serialization() {
        let provider = OAuthProvider::Google;
        let json = serde_json::to_string(&provider).unwrap();
        let deserialized: OAuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }
}
