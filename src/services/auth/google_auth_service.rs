//! # Google OAuth 2.0 인증 서비스
//!
//! Authorization Code Grant 플로우를 통한 Google 소셜 로그인을 제공합니다.
//!
//! ## 인증 플로우
//!
//! ```text
//! 1. GET /auth/google          → state 생성 후 Google 인증 페이지로 302
//! 2. 사용자가 Google에서 인증
//! 3. GET /auth/google/callback → state 검증
//! 4.                           → code를 액세스 토큰으로 교환
//! 5.                           → UserInfo API로 프로필 조회
//! 6.                           → 계정 결정 (기존 로그인 / 연동 / 신규 생성)
//! 7.                           → 세션 발급 후 프론트엔드로 302
//! ```
//!
//! ## 계정 결정 정책
//!
//! 계정 결정은 순수 함수 [`resolve_oauth_account`]에 위임됩니다:
//!
//! 1. `google_id` 일치 → 기존 사용자 로그인
//! 2. 이메일 일치 → 기존 계정에 `google_id` 연동 후 로그인
//! 3. 둘 다 없음 → 새 계정 생성
//!
//! 공급자 프로필에 이메일이 없으면 인증이 거부됩니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    config::{FrontendConfig, GoogleOAuthConfig, OAuthConfig, OAuthProvider},
    core::errors::AppError,
    domain::entities::users::user::User,
    domain::models::oauth::{
        resolve_oauth_account, GoogleTokenResponse, GoogleUserInfo, OAuthAccountPlan, OAuthProfile,
    },
    repositories::users::user_repo::UserRepository,
    services::auth::password::hash_secret,
};

/// Google OAuth 2.0 인증 서비스
///
/// OAuth URL 생성, 콜백 처리, 토큰 교환, 프로필 조회,
/// 계정 생성/연동을 담당합니다. 세션 발급은 핸들러가
/// `SessionService`를 통해 수행합니다.
#[service]
pub struct GoogleAuthService {
    /// 사용자 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl GoogleAuthService {
    /// Google OAuth 로그인 URL 생성
    ///
    /// 사용자를 Google 인증 페이지로 리다이렉트하기 위한
    /// Authorization URL을 생성합니다.
    ///
    /// ```text
    /// https://accounts.google.com/o/oauth2/auth?
    ///   client_id=...&redirect_uri=...&scope=openid%20email%20profile&
    ///   response_type=code&state=...
    /// ```
    pub fn get_login_url(&self) -> Result<String, AppError> {
        let state = self.generate_oauth_state()?;

        let params = [
            ("client_id", GoogleOAuthConfig::client_id()),
            ("redirect_uri", GoogleOAuthConfig::redirect_uri()),
            ("scope", "openid email profile".to_string()),
            ("response_type", "code".to_string()),
            ("state", state),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{}?{}", GoogleOAuthConfig::auth_uri(), query_string))
    }

    /// Authorization Code로 사용자 인증 및 계정 결정
    ///
    /// # 처리 단계
    ///
    /// 1. state 검증 (CSRF 방지)
    /// 2. code → 액세스 토큰 교환
    /// 3. UserInfo API로 프로필 조회
    /// 4. 계정 결정 및 생성/연동 수행
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증된 사용자 (세션 발급은 호출자 책임)
    /// * `Err(AppError::AuthenticationError)` - state 검증 실패, 이메일 없는 프로필
    /// * `Err(AppError::ExternalServiceError)` - Google API 통신 오류
    pub async fn authenticate_with_code(
        &self,
        auth_code: &str,
        state: &str,
    ) -> Result<User, AppError> {
        self.verify_oauth_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code).await?;
        let google_user = self.get_user_info(&token_response.access_token).await?;

        let profile = OAuthProfile {
            provider_id: google_user.id,
            email: google_user.email,
            name: google_user.name,
        };

        let provider = OAuthProvider::Google;

        let by_provider_id = self
            .user_repo
            .find_by_provider_id(&provider, &profile.provider_id)
            .await?;

        let by_email = match profile.email.as_deref() {
            Some(email) if !email.trim().is_empty() => {
                self.user_repo.find_by_email(&email.trim().to_lowercase()).await?
            }
            _ => None,
        };

        match resolve_oauth_account(by_provider_id, by_email, &profile)? {
            OAuthAccountPlan::UseExisting(user) => {
                log::info!("Google 사용자 로그인: {}", user.email);
                Ok(user)
            }
            OAuthAccountPlan::LinkProvider(user) => {
                let user_id = user.id_string().ok_or_else(|| {
                    AppError::InternalError("사용자 ID가 없습니다".to_string())
                })?;

                log::info!("기존 계정에 Google 연동: {}", user.email);

                self.user_repo
                    .link_provider(&user_id, &provider, &profile.provider_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound("사용자를 찾을 수 없습니다".to_string())
                    })
            }
            OAuthAccountPlan::CreateNew { email } => {
                log::info!("새 Google 사용자 등록: {}", email);
                self.create_oauth_user(email, profile.name.as_deref(), &provider, &profile.provider_id)
                    .await
            }
        }
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// ```text
    /// POST https://oauth2.googleapis.com/token
    /// Content-Type: application/x-www-form-urlencoded
    /// ```
    async fn exchange_code_for_token(
        &self,
        auth_code: &str,
    ) -> Result<GoogleTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let params = [
            ("code", auth_code),
            ("client_id", &GoogleOAuthConfig::client_id()),
            ("client_secret", &GoogleOAuthConfig::client_secret()),
            ("redirect_uri", &GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code"),
        ];

        let response = client
            .post(GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Google 사용자 정보 조회
    ///
    /// ```text
    /// GET https://www.googleapis.com/oauth2/v2/userinfo
    /// Authorization: Bearer ACCESS_TOKEN
    /// ```
    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get("https://www.googleapis.com/oauth2/v2/userinfo")
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }

    /// OAuth 프로필로 새 사용자 계정 생성
    ///
    /// OAuth 사용자도 로컬 사용자와 동일한 스키마를 사용하므로
    /// 로그인에 쓰일 수 없는 무작위 비밀번호 해시를 저장합니다.
    async fn create_oauth_user(
        &self,
        email: String,
        display_name: Option<&str>,
        provider: &OAuthProvider,
        provider_id: &str,
    ) -> Result<User, AppError> {
        let base_name = display_name
            .filter(|name| !name.trim().is_empty())
            .map(|name| name.to_string())
            .unwrap_or_else(|| {
                email.split('@').next().unwrap_or("user").to_string()
            });

        let username = self.generate_unique_username(&base_name).await?;

        // OAuth 계정은 비밀번호 로그인이 불가능해야 함
        let random_password = uuid::Uuid::new_v4().to_string();
        let password_hash = hash_secret(&random_password)?;

        let user = User::new_oauth(email, username, password_hash, provider, provider_id.to_string());

        self.user_repo.create(user).await
    }

    /// 중복되지 않는 고유 사용자명 생성
    ///
    /// 기본 이름을 정규화한 뒤 중복 시 숫자 접미사를 붙입니다.
    ///
    /// ```text
    /// "John Doe" → "john_doe" → (중복) "john_doe_1" → ...
    /// ```
    async fn generate_unique_username(&self, base_name: &str) -> Result<String, AppError> {
        let base = Self::sanitize_username(base_name);
        let mut username = base.clone();
        let mut counter = 1;

        loop {
            match self.user_repo.find_by_username(&username).await? {
                None => return Ok(username),
                Some(_) => {
                    username = format!("{}_{}", base, counter);
                    counter += 1;

                    if counter > 1000 {
                        return Err(AppError::InternalError("사용자명 생성 실패".to_string()));
                    }
                }
            }
        }
    }

    /// 사용자명 정규화
    ///
    /// 소문자 변환 후 영숫자 외 문자를 언더스코어로 치환합니다.
    fn sanitize_username(base_name: &str) -> String {
        let sanitized: String = base_name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        if sanitized.chars().all(|c| c == '_') {
            "user".to_string()
        } else {
            sanitized
        }
    }

    /// OAuth State 매개변수 생성 (CSRF 방지)
    ///
    /// `timestamp:secret`을 해시한 값을 사용합니다.
    fn generate_oauth_state(&self) -> Result<String, AppError> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::InternalError(format!("시간 계산 실패: {}", e)))?
            .as_secs();

        let state_data = format!("{}:{}", timestamp, OAuthConfig::state_secret());

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        state_data.hash(&mut hasher);

        Ok(format!("{:x}", hasher.finish()))
    }

    /// OAuth State 매개변수 검증
    ///
    /// TODO: Redis에 state를 임시 저장하고 일회성/만료를 강제
    fn verify_oauth_state(&self, state: &str) -> Result<(), AppError> {
        if state.is_empty() {
            return Err(AppError::AuthenticationError("유효하지 않은 OAuth state".to_string()));
        }

        Ok(())
    }

    /// 콜백 성공 시 프론트엔드 리다이렉트 URL
    ///
    /// 토큰은 쿼리가 아니라 URL 프래그먼트로 전달되어 서버 로그와
    /// Referer 헤더에 남지 않습니다.
    pub fn success_redirect_url(access_token: &str, refresh_token: &str) -> String {
        format!(
            "{}/oauth/callback#access_token={}&refresh_token={}",
            FrontendConfig::base_url(),
            urlencoding::encode(access_token),
            urlencoding::encode(refresh_token),
        )
    }

    /// 콜백 실패 시 프론트엔드 리다이렉트 URL
    pub fn failure_redirect_url() -> String {
        format!("{}/login?error=google", FrontendConfig::base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_username() {
        assert_eq!(GoogleAuthService::sanitize_username("John Doe"), "john_doe");
        assert_eq!(GoogleAuthService::sanitize_username("user@123"), "user_123");
        assert_eq!(GoogleAuthService::sanitize_username("!!!"), "user");
    }

    #[test]
    fn test_redirect_urls() {
        unsafe {
            std::env::set_var("FRONTEND_URL", "https://app.example.com");
        }

        let url = GoogleAuthService::success_redirect_url("at.123", "rt.456");
        assert!(url.starts_with("https://app.example.com/oauth/callback#access_token="));
        assert!(url.contains("&refresh_token="));

        assert_eq!(
            GoogleAuthService::failure_redirect_url(),
            "https://app.example.com/login?error=google"
        );
    }
}
