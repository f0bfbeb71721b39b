//! 사용자 관리 서비스 모듈
//!
//! 사용자 계정의 생성, 조회, 캐스케이드 삭제를 담당합니다.
//! 비밀번호 검증과 세션 발급은 `services::auth` 쪽의 책임입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user_service = UserService::instance();
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::*;
