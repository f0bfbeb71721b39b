//! Posts DTO Module
//!
//! 게시물 생성과 조회를 위한 요청/응답 DTO입니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
