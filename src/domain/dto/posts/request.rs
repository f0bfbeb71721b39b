//! 게시물 생성 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 게시물 생성 요청 DTO
///
/// 작성자는 액세스 토큰이 있으면 토큰에서, 없으면 `user_id` 필드에서
/// 결정됩니다. 빈 문자열 `user_id`는 None으로 정규화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// 게시물 본문 (1-2000자)
    #[validate(length(
        min = 1,
        max = 2000,
        message = "게시물 내용은 1-2000자 사이여야 합니다"
    ))]
    pub content: String,

    /// 작성자 사용자 ID (토큰 없이 호출할 때 사용)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_user_id_becomes_none() {
        let request: CreatePostRequest =
            serde_json::from_str(r#"{"content": "hello", "user_id": "  "}"#).unwrap();
        assert_eq!(request.user_id, None);

        let request: CreatePostRequest =
            serde_json::from_str(r#"{"content": "hello"}"#).unwrap();
        assert_eq!(request.user_id, None);
    }

    #[test]
    fn test_content_length_validation() {
        let empty = CreatePostRequest {
            content: "".to_string(),
            user_id: None,
        };
        assert!(empty.validate().is_err());

        let too_long = CreatePostRequest {
            content: "가".repeat(2001),
            user_id: None,
        };
        assert!(too_long.validate().is_err());

        let ok = CreatePostRequest {
            content: "첫 게시물입니다".to_string(),
            user_id: Some("507f1f77bcf86cd799439011".to_string()),
        };
        assert!(ok.validate().is_ok());
    }
}
