//! Likes DTO Module
//!
//! 좋아요 엔드포인트의 요청/응답 DTO입니다.
//! 이 엔드포인트들의 와이어 필드는 snake_case를 사용합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
