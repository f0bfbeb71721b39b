//! 좋아요 요청 DTO

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_optional_string;

/// 좋아요 호출자 식별 DTO
///
/// 본문(POST/DELETE)과 쿼리 파라미터(GET) 양쪽에서 사용됩니다.
/// 액세스 토큰이 있으면 토큰이 우선하고, 없으면 이 `user_id`가 사용됩니다.
/// 둘 다 없으면 400입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LikeIdentity {
    /// 호출자 사용자 ID (토큰 없이 호출할 때 사용)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_blank_user_id_become_none() {
        let identity: LikeIdentity = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(identity.user_id, None);

        let identity: LikeIdentity = serde_json::from_str(r#"{"user_id": ""}"#).unwrap();
        assert_eq!(identity.user_id, None);

        let identity: LikeIdentity =
            serde_json::from_str(r#"{"user_id": "507f1f77bcf86cd799439011"}"#).unwrap();
        assert_eq!(
            identity.user_id.as_deref(),
            Some("507f1f77bcf86cd799439011")
        );
    }
}
