//! 사용자 응답 DTO

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시와 리프레시 토큰 해시 등 민감한 필드는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            created_at,
            updated_at,
        }
    }
}

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_drops_sensitive_fields() {
        let mut user = User::new_local(
            "user@example.com".to_string(),
            "tester".to_string(),
            "$2b$04$hash".to_string(),
        );
        user.refresh_token_hash = Some("$2b$04$refresh".to_string());

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(json.contains("\"email\":\"user@example.com\""));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("refresh_token_hash"));
    }
}
