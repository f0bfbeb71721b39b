//! Post Entity Implementation
//!
//! 좋아요 원장이 참조하는 게시물 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 게시물 엔티티
///
/// `like_count`는 `post_likes` 컬렉션에서 비정규화된 카운터로,
/// 원장 행이 실제로 생성/삭제될 때만 변경되며 음수가 될 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자 사용자 ID
    pub author_id: ObjectId,
    /// 게시물 본문
    pub content: String,
    /// 비정규화된 좋아요 수 (항상 0 이상)
    pub like_count: i64,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Post {
    /// 새 게시물 생성
    pub fn new(author_id: ObjectId, content: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            author_id,
            content,
            like_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_starts_with_zero_likes() {
        let post = Post::new(ObjectId::new(), "첫 게시물".to_string());

        assert!(post.id.is_none());
        assert_eq!(post.like_count, 0);
        assert_eq!(post.content, "첫 게시물");
    }
}
