//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증, 세션 수명주기, OAuth 2.0 소셜 로그인을
//! 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 발급 및 검증 (이중 시크릿)
//! - 단일 세션 모델과 리프레시 토큰 회전
//! - bcrypt 기반 비밀번호/토큰 at-rest 해싱
//! - Google OAuth 2.0 소셜 로그인
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 리프레시 토큰은 bcrypt 해시로만 저장
//! - 갱신 실패는 단일 401 메시지로 수렴
//! - CSRF 방지 (OAuth State 매개변수)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{SessionService, TokenService};
//!
//! let session_service = SessionService::instance();
//! let auth_response = session_service.login(email, password).await?;
//!
//! let token_service = TokenService::instance();
//! let claims = token_service.verify_access_token(token)?;
//! ```

pub mod password;
pub mod token_service;
pub mod session_service;
pub mod google_auth_service;

pub use token_service::*;
pub use session_service::*;
pub use google_auth_service::*;
