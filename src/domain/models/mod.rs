//! # Domain Models Module
//!
//! 인증 컨텍스트와 외부 시스템 통합을 위한 모델들을 정의합니다.
//! 영속성 엔티티(`../entities/`)와 달리 식별자보다 값 자체가 중요한
//! 객체들이며, 가능한 한 불변 객체로 설계되었습니다.
//!
//! ## 모듈 구성
//!
//! - [`token`] - JWT 클레임(`TokenClaims`)과 토큰 쌍(`TokenPair`)
//! - [`auth`] - 인증 미들웨어 모드(`AuthMode`)와 요청 확장에서 추출되는
//!   `AuthenticatedUser` / `OptionalUser`
//! - [`oauth`] - Google OAuth 응답 모델과 계정 연결 결정 로직
//!   (`OAuthAccountPlan`, `resolve_oauth_account`)
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::domain::models::oauth::{resolve_oauth_account, OAuthAccountPlan};
//!
//! let plan = resolve_oauth_account(by_provider_id, by_email, &profile)?;
//! match plan {
//!     OAuthAccountPlan::UseExisting(user) => { /* 로그인 */ }
//!     OAuthAccountPlan::LinkProvider(user) => { /* 공급자 ID 연결 */ }
//!     OAuthAccountPlan::CreateNew { email } => { /* 계정 생성 */ }
//! }
//! ```

pub mod token;
pub mod auth;
pub mod oauth;

pub use token::*;
pub use auth::*;
pub use oauth::*;
