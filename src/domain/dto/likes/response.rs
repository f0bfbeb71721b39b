//! 좋아요 응답 DTO

use serde::{Deserialize, Serialize};

/// 좋아요 상태 응답 DTO
///
/// 좋아요/취소/조회가 공통으로 반환하는 현재 상태입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeStatusResponse {
    /// 호출자가 해당 게시물을 좋아요한 상태인지 여부
    pub liked: bool,
    /// 게시물의 비정규화된 좋아요 수
    pub like_count: i64,
}

/// 좋아요 카운트 응답 DTO
///
/// 비정규화 카운터와 원장 실측값을 함께 반환하여
/// 드리프트를 외부에서 관찰할 수 있게 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeCountResponse {
    /// 게시물 문서의 비정규화 카운터
    pub like_count: i64,
    /// 원장(`post_likes`)의 실제 행 수
    pub actual_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_responses_use_snake_case() {
        let status = LikeStatusResponse {
            liked: true,
            like_count: 3,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"liked\":true"));
        assert!(json.contains("\"like_count\":3"));

        let count = LikeCountResponse {
            like_count: 3,
            actual_count: 4,
        };
        let json = serde_json::to_string(&count).unwrap();
        assert!(json.contains("\"actual_count\":4"));
    }
}
