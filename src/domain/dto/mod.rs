//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **API 계약 우선**: 클라이언트가 기대할 수 있는 명확한 데이터 구조
//! - **유효성 검증 내장**: `validator` crate를 통한 입력값 검증
//! - **도메인 분리**: Entity와 DTO의 명확한 분리, 민감 정보 노출 방지
//!
//! ## 와이어 포맷 규약
//!
//! - 인증 엔드포인트(`/auth/*`)는 camelCase 필드를 사용합니다
//!   (`accessToken`, `refreshToken`)
//! - 좋아요 엔드포인트(`/post/{id}/like*`)는 snake_case 필드를 사용합니다
//!   (`liked`, `like_count`, `actual_count`)
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── auth/    # 로그인/리프레시/로그아웃/OAuth 콜백 DTO
//! ├── users/   # 사용자 생성/조회 DTO
//! ├── posts/   # 게시물 생성/조회 DTO
//! └── likes/   # 좋아요 식별/상태/카운트 DTO
//! ```
//!
//! ## 명명 규칙
//!
//! - **Request DTO**: `{Action}{Entity}Request` (예: `CreateUserRequest`)
//! - **Response DTO**: `{Entity}Response` (예: `UserResponse`)
//! - **변환 패턴**: `impl From<Entity> for Response`

pub mod auth;
pub mod users;
pub mod posts;
pub mod likes;

pub use auth::*;
pub use users::*;
pub use posts::*;
pub use likes::*;
