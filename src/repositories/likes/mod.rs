//! 좋아요 원장 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`LikeRepository`](like_repo::LikeRepository)가 `post_likes` 컬렉션을
//! 관리합니다. `(user_id, post_id)` 유니크 인덱스가 진실의 원천이며,
//! 게시물 문서의 `like_count`는 이 원장에서 파생된 값입니다.

pub mod like_repo;
