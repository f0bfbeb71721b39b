//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 사용자 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## 요청 DTO
//!
//! ### CreateUserRequest - 회원가입 요청
//!
//! - **이메일**: RFC 5322 표준 형식 검증, 소문자로 정규화되어 저장
//! - **사용자명**: 3-30자, 영문/숫자/언더스코어만 허용
//! - **비밀번호**: 최소 8자
//!
//! ## 응답 DTO
//!
//! ### UserResponse - 기본 사용자 정보
//!
//! 비밀번호 해시, 리프레시 토큰 해시 등 민감한 정보는 제외됩니다.
//!
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "username": "john_doe",
//!   "email": "user@example.com",
//!   "created_at": "2026-01-01T00:00:00Z",
//!   "updated_at": "2026-01-15T10:30:00Z"
//! }
//! ```
//!
//! ### CreateUserResponse - 회원가입 성공 응답
//!
//! ```json
//! {
//!   "user": { "id": "...", "username": "john_doe", "email": "user@example.com" },
//!   "message": "사용자가 성공적으로 생성되었습니다"
//! }
//! ```

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
