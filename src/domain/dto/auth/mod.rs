//! Auth DTO Module
//!
//! 로그인, 토큰 갱신, 로그아웃, OAuth 콜백을 위한 요청/응답 DTO입니다.
//! 이 엔드포인트들의 와이어 필드는 camelCase를 사용합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
