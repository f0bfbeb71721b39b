//! Post HTTP Handlers
//!
//! 좋아요 대상이 되는 게시물의 생성/조회/삭제 엔드포인트입니다.
//! `/post` 스코프는 선택적 인증으로 감싸져 있어 토큰이 있으면
//! 토큰의 사용자가, 없으면 본문의 `user_id`가 호출자가 됩니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/post` | 게시물 생성 | 201 Created |
//! | `GET` | `/post/{post_id}` | 게시물 조회 | 200 OK |
//! | `DELETE` | `/post/{post_id}` | 게시물 삭제 (캐스케이드) | 204 No Content |

use actix_web::{web, HttpResponse, get, post, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::posts::request::CreatePostRequest;
use crate::domain::models::auth::OptionalUser;
use crate::handlers::resolve_caller_id;
use crate::services::posts::post_service::PostService;

/// 게시물 생성 핸들러
///
/// # Endpoint
/// `POST /post`
#[post("")]
pub async fn create_post(
    authenticated: OptionalUser,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let payload = payload.into_inner();
    let author_id = resolve_caller_id(authenticated, payload.user_id)?;

    let service = PostService::instance();
    let response = service.create_post(&author_id, payload.content).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 게시물 조회 핸들러
///
/// # Endpoint
/// `GET /post/{post_id}`
#[get("/{post_id}")]
pub async fn get_post(
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let post = service.get_post(&post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// 게시물 삭제 핸들러
///
/// 게시물의 좋아요 원장 행을 먼저 정리한 뒤 문서를 삭제합니다.
///
/// # Endpoint
/// `DELETE /post/{post_id}`
#[delete("/{post_id}")]
pub async fn delete_post(
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    service.delete_post(&post_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
