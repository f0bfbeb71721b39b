//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증과 OAuth 인증을 모두 지원하는 통합된 사용자 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::OAuthProvider;

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 이메일은 항상 소문자로 저장되며, OAuth로 생성된 계정도
/// 무작위 비밀번호 해시를 가지므로 `password_hash`는 항상 존재합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 사용자 이메일 (unique, 소문자 저장)
    pub email: String,
    /// bcrypt 해시된 비밀번호 (OAuth 사용자는 무작위 UUID 비밀번호)
    pub password_hash: String,
    /// 현재 세션의 리프레시 토큰 bcrypt 해시
    ///
    /// 사용자당 하나만 저장되므로 새 로그인은 이전 세션을 무효화합니다.
    /// None이면 활성 세션이 없는 상태입니다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_hash: Option<String>,
    /// Google 계정 ID (unique + sparse)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    /// Facebook 계정 ID (unique + sparse)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    ///
    /// 이메일은 저장 전에 소문자로 정규화됩니다.
    pub fn new_local(email: String, username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email: email.to_lowercase(),
            password_hash,
            refresh_token_hash: None,
            google_id: None,
            facebook_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 OAuth 사용자 생성
    ///
    /// 공급자 ID를 해당 공급자의 필드에 저장합니다.
    /// `password_hash`에는 무작위 UUID를 해시한 값이 전달되어야 합니다.
    pub fn new_oauth(
        email: String,
        username: String,
        password_hash: String,
        provider: &OAuthProvider,
        provider_id: String,
    ) -> Self {
        let now = DateTime::now();

        let mut user = Self {
            id: None,
            username,
            email: email.to_lowercase(),
            password_hash,
            refresh_token_hash: None,
            google_id: None,
            facebook_id: None,
            created_at: now,
            updated_at: now,
        };

        match provider {
            OAuthProvider::Google => user.google_id = Some(provider_id),
            OAuthProvider::Facebook => user.facebook_id = Some(provider_id),
        }

        user
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 특정 공급자에 연결된 계정 ID 가져오기
    pub fn provider_id(&self, provider: &OAuthProvider) -> Option<&str> {
        match provider {
            OAuthProvider::Google => self.google_id.as_deref(),
            OAuthProvider::Facebook => self.facebook_id.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_lowercases_email() {
        let user = User::new_local(
            "User@Example.COM".to_string(),
            "tester".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert_eq!(user.email, "user@example.com");
        assert!(user.id.is_none());
        assert!(user.refresh_token_hash.is_none());
        assert!(user.google_id.is_none());
    }

    #[test]
    fn test_new_oauth_assigns_provider_field() {
        let user = User::new_oauth(
            "oauth@example.com".to_string(),
            "oauth_user".to_string(),
            "$2b$04$hash".to_string(),
            &OAuthProvider::Google,
            "google-123".to_string(),
        );

        assert_eq!(user.google_id.as_deref(), Some("google-123"));
        assert!(user.facebook_id.is_none());
        assert_eq!(
            user.provider_id(&OAuthProvider::Google),
            Some("google-123")
        );
        assert_eq!(user.provider_id(&OAuthProvider::Facebook), None);
    }
}
