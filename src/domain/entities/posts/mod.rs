//! Posts Entity Module
//!
//! 좋아요 원장이 참조하는 게시물 엔티티를 정의하는 모듈입니다.
//! `Post.like_count`는 원장에서 비정규화된 카운터입니다.

pub mod post;

pub use post::*;
