//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! 로컬 인증과 OAuth 인증을 모두 지원하는 User 엔티티를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//! use crate::config::OAuthProvider;
//!
//! // 로컬 사용자 생성
//! let user = User::new_local(
//!     "user@example.com".to_string(),
//!     "username".to_string(),
//!     hashed_password,
//! );
//!
//! // OAuth 사용자 생성 (무작위 비밀번호를 해시하여 전달)
//! let oauth_user = User::new_oauth(
//!     "user@gmail.com".to_string(),
//!     "oauth_username".to_string(),
//!     hashed_random_password,
//!     &OAuthProvider::Google,
//!     "google_user_id_123".to_string(),
//! );
//! ```

pub mod user;

pub use user::*;
