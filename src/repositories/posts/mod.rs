//! 게시물 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`PostRepository`](post_repo::PostRepository)를 통해 게시물 CRUD와
//! 비정규화된 좋아요 카운터의 원자적 증감을 제공합니다.

pub mod post_repo;
