//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## Endpoints
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users/{id}` | 사용자 공개 프로필 조회 | 200 OK |
//! | `GET` | `/users/me` | 내 프로필 조회 (인증 필수) | 200 OK |
//! | `DELETE` | `/users/me` | 내 계정 삭제 (인증 필수) | 204 No Content |
//!
//! ## 에러 응답 예시
//!
//! ### 중복 이메일 (409 Conflict)
//! ```json
//! {"error": "Conflict error: 이미 사용 중인 이메일입니다"}
//! ```
//!
//! ### 사용자 없음 (404 Not Found)
//! ```json
//! {"error": "Not found: 사용자를 찾을 수 없습니다"}
//! ```

use actix_web::{web, HttpResponse, get, post, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::user_service::UserService;

/// 사용자 생성 핸들러
///
/// 새로운 로컬 인증 사용자 계정을 생성합니다.
/// 이메일과 사용자명의 고유성을 검증합니다.
///
/// # Endpoint
/// `POST /users`
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 조회 핸들러
///
/// 지정된 ID의 사용자 공개 프로필을 반환합니다.
/// 비밀번호 해시와 리프레시 토큰 해시는 응답에 포함되지 않습니다.
///
/// # Endpoint
/// `GET /users/{user_id}`
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 내 프로필 조회 핸들러
///
/// 액세스 토큰의 사용자 정보를 DB에서 조회하여 반환합니다.
///
/// # Endpoint
/// `GET /users/me` (인증 필수)
#[get("")]
pub async fn get_me(
    authenticated: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user_by_id(&authenticated.user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 내 계정 삭제 핸들러
///
/// 호출자의 계정을 캐스케이드 삭제합니다. 좋아요 원장과
/// 비정규화 카운터가 먼저 정리됩니다. 되돌릴 수 없습니다.
///
/// # Endpoint
/// `DELETE /users/me` (인증 필수)
#[delete("")]
pub async fn delete_me(
    authenticated: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.delete_account(&authenticated.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
