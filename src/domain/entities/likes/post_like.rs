//! PostLike Entity Implementation
//!
//! 좋아요 원장의 단위 행입니다. `(user_id, post_id)` 복합 유니크
//! 인덱스가 좋아요 존재 여부의 단일 진실 공급원입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 좋아요 원장 행
///
/// 사용자-게시물 쌍당 최대 한 행만 존재합니다. 행의 생성과 삭제가
/// 게시물의 `like_count` 증감을 결정합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostLike {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 좋아요를 누른 사용자 ID
    pub user_id: ObjectId,
    /// 대상 게시물 ID
    pub post_id: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
}

impl PostLike {
    /// 새 좋아요 행 생성
    pub fn new(user_id: ObjectId, post_id: ObjectId) -> Self {
        Self {
            id: None,
            user_id,
            post_id,
            created_at: DateTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_like_links_user_and_post() {
        let user_id = ObjectId::new();
        let post_id = ObjectId::new();
        let like = PostLike::new(user_id, post_id);

        assert!(like.id.is_none());
        assert_eq!(like.user_id, user_id);
        assert_eq!(like.post_id, post_id);
    }
}
