//! 세션 수명주기 서비스 구현
//!
//! 로그인, 토큰 갱신, 로그아웃을 담당합니다.
//!
//! ## 단일 세션 모델
//!
//! 사용자 문서는 리프레시 토큰 해시를 하나만 저장합니다.
//! 새 로그인은 기존 해시를 덮어써서 이전 기기의 세션을 무효화합니다.
//!
//! ## 토큰 회전
//!
//! 갱신 성공 시 새 토큰 쌍이 발급되고 저장된 해시가 교체되므로
//! 사용된 리프레시 토큰은 재사용할 수 없습니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::dto::auth::response::AuthResponse,
    domain::entities::users::user::User,
    domain::models::token::TokenPair,
    repositories::users::user_repo::UserRepository,
    services::auth::password::{hash_secret, verify_secret},
    services::auth::token_service::TokenService,
};

/// 세션 수명주기 서비스
///
/// 자격 증명 검증과 리프레시 토큰의 at-rest 관리를 담당합니다.
/// 토큰 서명 자체는 [`TokenService`]에 위임합니다.
#[service(name = "session")]
pub struct SessionService {
    /// 사용자 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl SessionService {
    /// 이메일/비밀번호 로그인
    ///
    /// 계정 부재와 비밀번호 불일치는 동일한 메시지로 응답하여
    /// 이메일 존재 여부를 노출하지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(AuthResponse)` - 토큰 쌍과 사용자 프로필
    /// * `Err(AppError::AuthenticationError)` - 자격 증명 불일치
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let email = email.to_lowercase();

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string())
            })?;

        if !verify_secret(password, &user.password_hash)? {
            return Err(AppError::AuthenticationError(
                "잘못된 이메일 또는 비밀번호입니다".to_string(),
            ));
        }

        let tokens = self.issue_session(&user).await?;

        log::info!("✅ 로그인 성공: {}", user.email);

        Ok(AuthResponse::new(tokens, user))
    }

    /// 사용자에 대한 새 세션 발급
    ///
    /// 토큰 쌍을 발급하고 리프레시 토큰의 bcrypt 해시를 사용자
    /// 문서에 저장합니다. 기존 해시는 덮어써지므로 이전 세션은
    /// 더 이상 갱신할 수 없습니다.
    ///
    /// OAuth 콜백 경로도 이 메서드를 통해 세션을 발급받습니다.
    pub async fn issue_session(&self, user: &User) -> Result<TokenPair, AppError> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        let token_service = TokenService::instance();
        let tokens = token_service.issue_pair(&user_id)?;

        let refresh_hash = hash_secret(&tokens.refresh_token)?;
        self.user_repo
            .set_refresh_token_hash(&user_id, Some(&refresh_hash))
            .await?;

        Ok(tokens)
    }

    /// 리프레시 토큰으로 토큰 쌍 갱신 (일회용 회전)
    ///
    /// 모든 실패 사유(서명 오류, 만료, 사용자 부재, 저장 해시 부재,
    /// 해시 불일치)는 동일한 401 메시지로 수렴합니다. 실패 원인을
    /// 구분해서 알려주면 탈취된 토큰의 상태를 탐색할 수 있습니다.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let rejected = || {
            AppError::AuthenticationError("리프레시 토큰이 유효하지 않습니다".to_string())
        };

        let token_service = TokenService::instance();
        let claims = token_service
            .verify_refresh_token(refresh_token)
            .map_err(|_| rejected())?;

        let user = self
            .user_repo
            .find_by_id(&claims.sub)
            .await
            .map_err(|_| rejected())?
            .ok_or_else(rejected)?;

        let stored_hash = user.refresh_token_hash.as_deref().ok_or_else(rejected)?;

        // 제출된 토큰이 현재 활성 세션의 토큰인지 확인
        if !verify_secret(refresh_token, stored_hash).map_err(|_| rejected())? {
            return Err(rejected());
        }

        // 회전: 새 쌍 발급 + 저장 해시 교체
        let tokens = self.issue_session(&user).await?;

        log::info!("🔄 토큰 갱신 완료: {}", claims.sub);

        Ok(tokens)
    }

    /// 로그아웃 (fail-open)
    ///
    /// 제출된 토큰이 유효하면 저장된 리프레시 토큰 해시를 제거합니다.
    /// 토큰이 이미 만료되었거나 유효하지 않아도 에러를 반환하지
    /// 않습니다. 로그아웃은 항상 성공해야 하는 연산입니다.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let token_service = TokenService::instance();

        let claims = match token_service.verify_refresh_token(refresh_token) {
            Ok(claims) => claims,
            Err(e) => {
                log::debug!("로그아웃 토큰 검증 실패 (무시): {}", e);
                return Ok(());
            }
        };

        if let Err(e) = self
            .user_repo
            .set_refresh_token_hash(&claims.sub, None)
            .await
        {
            log::debug!("로그아웃 세션 제거 실패 (무시): {}", e);
        }

        Ok(())
    }
}
