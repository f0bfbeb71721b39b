//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 영속화되는 핵심 비즈니스 객체 (User, Post, PostLike)
//! ├── DTOs      - 데이터 전송 객체 (Request/Response)
//! └── Models    - 인증/외부 시스템 통합 모델 (JWT 클레임, OAuth)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 저장되는 도메인 객체들입니다. 고유 ID를 통한 식별성과
//! 생성/수정 타임스탬프를 공통으로 가집니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! `validator` derive를 통한 입력 검증과 serde 직렬화 계약을 정의합니다.
//! 인증 엔드포인트는 camelCase, 좋아요 엔드포인트는 snake_case를 사용합니다.
//!
//! ### [`models`] - 인증 및 외부 시스템 통합 모델
//!
//! - JWT 클레임과 토큰 쌍
//! - 미들웨어가 주입하는 인증 사용자 컨텍스트
//! - Google OAuth 응답 모델과 계정 연결 결정 로직

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
