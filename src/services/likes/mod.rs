//! 좋아요 서비스 모듈
//!
//! 멱등적 좋아요/취소와 원장-카운터 정합성 관리를 담당합니다.

pub mod like_service;

pub use like_service::*;
