//! OAuth 통합 모델
//!
//! Google OAuth 응답 모델과 계정 연결 결정 로직을 정의합니다.
//! 계정 결정은 네트워크 없이 단위 테스트할 수 있도록
//! 순수 함수(`resolve_oauth_account`)로 분리되어 있습니다.

use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;

/// Google 토큰 교환 응답
///
/// authorization code를 액세스 토큰으로 교환했을 때의 응답입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// userinfo 조회에 사용할 액세스 토큰
    pub access_token: String,
    /// 토큰 만료 시간 (초)
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// 토큰 타입 (일반적으로 "Bearer")
    #[serde(default)]
    pub token_type: Option<String>,
    /// OpenID Connect ID 토큰
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Google userinfo 엔드포인트 응답
///
/// 이메일은 공급자가 보장하지 않으므로 Option으로 표현합니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 고유 ID
    pub id: String,
    /// 계정 이메일 (공개 범위에 따라 없을 수 있음)
    #[serde(default)]
    pub email: Option<String>,
    /// 표시 이름
    #[serde(default)]
    pub name: Option<String>,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub picture: Option<String>,
}

/// 공급자 중립적인 OAuth 프로필
///
/// 공급자별 응답 모델을 계정 결정 로직이 소비하는 공통 형태로 변환한 것입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthProfile {
    /// 공급자 측 계정 고유 ID
    pub provider_id: String,
    /// 공급자가 제공한 이메일
    pub email: Option<String>,
    /// 공급자가 제공한 표시 이름
    pub name: Option<String>,
}

/// OAuth 로그인 시 계정을 어떻게 처리할지에 대한 결정
///
/// 세 가지 경로가 명시적 변형으로 표현되므로 결정 테이블을
/// 그대로 검증할 수 있습니다.
#[derive(Debug)]
pub enum OAuthAccountPlan {
    /// 공급자 ID가 이미 연결된 기존 계정으로 로그인
    UseExisting(User),
    /// 이메일이 일치하는 기존 계정에 공급자 ID를 연결
    LinkProvider(User),
    /// 새 계정 생성 (소문자 정규화된 이메일)
    CreateNew {
        email: String,
    },
}

/// OAuth 프로필과 기존 계정 조회 결과로부터 계정 처리 방침을 결정합니다.
///
/// ## 결정 테이블
///
/// 1. 공급자 ID가 일치하는 사용자가 있으면 그대로 로그인
/// 2. 없으면 이메일 필요 - 프로필에 이메일이 없으면 인증 실패
/// 3. 이메일이 일치하는 사용자가 있으면 공급자 ID를 연결
/// 4. 둘 다 없으면 새 계정 생성
///
/// ## 인자
///
/// - `by_provider_id` - 공급자 ID로 조회한 기존 사용자
/// - `by_email` - 소문자 정규화된 이메일로 조회한 기존 사용자
/// - `profile` - 공급자에서 받아온 프로필
pub fn resolve_oauth_account(
    by_provider_id: Option<User>,
    by_email: Option<User>,
    profile: &OAuthProfile,
) -> AppResult<OAuthAccountPlan> {
    if let Some(user) = by_provider_id {
        return Ok(OAuthAccountPlan::UseExisting(user));
    }

    let email = match &profile.email {
        Some(email) if !email.trim().is_empty() => email.trim().to_lowercase(),
        _ => {
            return Err(AppError::AuthenticationError(
                "OAuth 프로필에 이메일이 없습니다".to_string(),
            ));
        }
    };

    if let Some(user) = by_email {
        return Ok(OAuthAccountPlan::LinkProvider(user));
    }

    Ok(OAuthAccountPlan::CreateNew { email })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing_user(email: &str) -> User {
        User::new_local(
            email.to_string(),
            "existing".to_string(),
            "$2b$04$hash".to_string(),
        )
    }

    fn profile(provider_id: &str, email: Option<&str>) -> OAuthProfile {
        OAuthProfile {
            provider_id: provider_id.to_string(),
            email: email.map(|e| e.to_string()),
            name: Some("Tester".to_string()),
        }
    }

    #[test]
    fn test_provider_match_wins() {
        let plan = resolve_oauth_account(
            Some(existing_user("a@example.com")),
            Some(existing_user("b@example.com")),
            &profile("g-1", Some("c@example.com")),
        )
        .unwrap();

        match plan {
            OAuthAccountPlan::UseExisting(user) => assert_eq!(user.email, "a@example.com"),
            other => panic!("Expected UseExisting, got {:?}", other),
        }
    }

    #[test]
    fn test_email_match_links_provider() {
        let plan = resolve_oauth_account(
            None,
            Some(existing_user("linked@example.com")),
            &profile("g-2", Some("Linked@Example.com")),
        )
        .unwrap();

        match plan {
            OAuthAccountPlan::LinkProvider(user) => {
                assert_eq!(user.email, "linked@example.com")
            }
            other => panic!("Expected LinkProvider, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match_creates_account_with_lowercased_email() {
        let plan =
            resolve_oauth_account(None, None, &profile("g-3", Some("New@Example.COM"))).unwrap();

        match plan {
            OAuthAccountPlan::CreateNew { email } => assert_eq!(email, "new@example.com"),
            other => panic!("Expected CreateNew, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_email_is_authentication_failure() {
        let err = resolve_oauth_account(None, None, &profile("g-4", None)).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(_)));

        let err = resolve_oauth_account(None, None, &profile("g-5", Some("  "))).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(_)));
    }
}
