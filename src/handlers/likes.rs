//! Like HTTP Handlers
//!
//! 좋아요 원장과 카운터를 노출하는 엔드포인트입니다.
//! 이 엔드포인트들의 와이어 필드는 snake_case를 사용합니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/post/{post_id}/like` | 좋아요 (멱등) | 200 OK |
//! | `DELETE` | `/post/{post_id}/like` | 좋아요 취소 (멱등) | 200 OK |
//! | `GET` | `/post/{post_id}/like` | 좋아요 여부 조회 | 200 OK |
//! | `GET` | `/post/{post_id}/likes/count` | 카운터 + 원장 실측값 | 200 OK |
//!
//! # 응답 예시
//!
//! ```json
//! {"liked": true, "like_count": 42}
//! ```
//!
//! ```json
//! {"like_count": 42, "actual_count": 42}
//! ```

use actix_web::{web, HttpResponse, get, post, delete};
use crate::core::errors::AppError;
use crate::domain::dto::likes::request::LikeIdentity;
use crate::domain::models::auth::OptionalUser;
use crate::handlers::resolve_caller_id;
use crate::services::likes::like_service::LikeService;

/// 좋아요 핸들러 (멱등)
///
/// 이미 좋아요한 게시물에 다시 호출해도 성공하며 카운터는 변하지
/// 않습니다. 본문은 선택 사항입니다 (토큰 인증 시 불필요).
///
/// # Endpoint
/// `POST /post/{post_id}/like`
#[post("/{post_id}/like")]
pub async fn like_post(
    authenticated: OptionalUser,
    post_id: web::Path<String>,
    payload: Option<web::Json<LikeIdentity>>,
) -> Result<HttpResponse, AppError> {
    let explicit = payload.map(|p| p.into_inner()).unwrap_or_default();
    let caller_id = resolve_caller_id(authenticated, explicit.user_id)?;

    let service = LikeService::instance();
    let status = service.like(&caller_id, &post_id).await?;

    Ok(HttpResponse::Ok().json(status))
}

/// 좋아요 취소 핸들러 (멱등)
///
/// 좋아요하지 않은 게시물에 호출해도 성공합니다.
///
/// # Endpoint
/// `DELETE /post/{post_id}/like`
#[delete("/{post_id}/like")]
pub async fn unlike_post(
    authenticated: OptionalUser,
    post_id: web::Path<String>,
    payload: Option<web::Json<LikeIdentity>>,
) -> Result<HttpResponse, AppError> {
    let explicit = payload.map(|p| p.into_inner()).unwrap_or_default();
    let caller_id = resolve_caller_id(authenticated, explicit.user_id)?;

    let service = LikeService::instance();
    let status = service.unlike(&caller_id, &post_id).await?;

    Ok(HttpResponse::Ok().json(status))
}

/// 좋아요 여부 조회 핸들러
///
/// 호출자 식별은 쿼리 파라미터(`?user_id=...`) 또는 토큰으로 합니다.
///
/// # Endpoint
/// `GET /post/{post_id}/like`
#[get("/{post_id}/like")]
pub async fn get_like_status(
    authenticated: OptionalUser,
    post_id: web::Path<String>,
    query: web::Query<LikeIdentity>,
) -> Result<HttpResponse, AppError> {
    let caller_id = resolve_caller_id(authenticated, query.into_inner().user_id)?;

    let service = LikeService::instance();
    let status = service.is_liked(&caller_id, &post_id).await?;

    Ok(HttpResponse::Ok().json(status))
}

/// 좋아요 카운트 조회 핸들러
///
/// 비정규화 카운터와 원장 실측값을 함께 반환합니다.
/// 호출자 식별이 필요 없는 공개 엔드포인트입니다.
///
/// # Endpoint
/// `GET /post/{post_id}/likes/count`
#[get("/{post_id}/likes/count")]
pub async fn get_like_count(
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = LikeService::instance();
    let count = service.count_likes(&post_id).await?;

    Ok(HttpResponse::Ok().json(count))
}
