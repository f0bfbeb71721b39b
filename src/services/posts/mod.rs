//! 게시물 관리 서비스 모듈
//!
//! 좋아요 대상이 되는 게시물의 생성, 조회, 캐스케이드 삭제를 담당합니다.

pub mod post_service;

pub use post_service::*;
