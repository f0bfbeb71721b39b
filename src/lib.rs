//! 소셜 서비스 백엔드
//!
//! Rust 기반의 소셜 미디어 백엔드 서비스입니다.
//! JWT 토큰 기반 인증, Google OAuth 2.0 소셜 로그인,
//! 게시물 좋아요 원장과 비정규화 카운터,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 로컬 계정 생성, 프로필 조회, 캐스케이드 계정 삭제
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증 (일회용 회전)
//! - **OAuth 2.0**: Google 소셜 로그인 및 이메일 기반 계정 연결
//! - **좋아요 원장**: (user_id, post_id) 유니크 원장 + 멱등 좋아요/취소
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 사용자/게시물/좋아요 데이터 영구 저장
//! - **Redis**: 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_service_backend::services::users::UserService;
//! use social_service_backend::services::likes::like_service::LikeService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//! let like_service = LikeService::instance();
//!
//! // 사용자 생성 및 좋아요
//! let user = user_service.create_user(request).await?;
//! let status = like_service.like(&caller_id, &post_id).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
