//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 인증/세션, 사용자, 게시물, 좋아요 기능을 담당합니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 캐스케이드 삭제)
//! - JWT 토큰 기반 인증과 리프레시 토큰 회전
//! - OAuth 2.0 소셜 로그인 (Google)
//! - 멱등적 좋아요 원장과 비정규화 카운터 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, likes::LikeService};
//!
//! let user_service = UserService::instance();
//! let like_service = LikeService::instance();
//! ```

pub mod auth;
pub mod users;
pub mod posts;
pub mod likes;
