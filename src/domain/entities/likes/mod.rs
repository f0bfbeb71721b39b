//! Likes Entity Module
//!
//! 좋아요 원장 행(PostLike)을 정의하는 모듈입니다.
//! `(user_id, post_id)` 복합 유니크 인덱스로 중복 좋아요를 차단합니다.

pub mod post_like;

pub use post_like::*;
