//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자, 게시물/좋아요 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # 인증 레벨
//!
//! | 스코프 | 미들웨어 | 비고 |
//! |--------|----------|------|
//! | `/auth` | 없음 | 인증을 위한 엔드포인트 |
//! | `/users` | 없음 | 회원가입과 공개 프로필 |
//! | `/users/me` | `AuthMiddleware::required()` | 토큰 필수 |
//! | `/post` | `AuthMiddleware::optional()` | 토큰 또는 명시적 `user_id` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_post_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// ## 로컬 인증
/// - `POST /auth/login` - 이메일/비밀번호 로그인
/// - `POST /auth/refresh` - 토큰 갱신 (일회용 회전)
/// - `POST /auth/logout` - 로그아웃 (fail-open)
///
/// ## OAuth (Google)
/// - `GET /auth/google` - Google 인증 페이지로 리다이렉트
/// - `GET /auth/google/callback` - 콜백 처리 후 프론트엔드로 리다이렉트
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            // 로컬 인증
            .service(handlers::auth::login)
            .service(handlers::auth::refresh)
            .service(handlers::auth::logout)
            // Google OAuth
            .service(handlers::auth::google_login)
            .service(handlers::auth::google_callback)
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// ## Public 라우트 (인증 불필요)
/// - `POST /users` - 사용자 생성 (회원가입)
/// - `GET /users/{id}` - 공개 프로필 조회
///
/// ## Protected 라우트 (인증 필수)
/// - `GET /users/me` - 내 프로필 조회
/// - `DELETE /users/me` - 내 계정 삭제 (캐스케이드)
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // Protected routes
    // `/users/{user_id}`보다 먼저 등록해야 "me"가 경로 변수로 잡히지 않음
    cfg.service(
        web::scope("/users/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_me)
            .service(handlers::users::delete_me)
    );

    // Public routes
    cfg.service(
        web::scope("/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
    );
}

/// 게시물/좋아요 라우트를 설정합니다
///
/// 전체 스코프가 선택적 인증으로 감싸져 있습니다. 유효한 토큰이
/// 있으면 토큰의 사용자가 호출자가 되고, 없으면 요청의 `user_id`가
/// 사용됩니다.
///
/// # Available Routes
///
/// - `POST /post` - 게시물 생성
/// - `GET /post/{id}` - 게시물 조회
/// - `DELETE /post/{id}` - 게시물 삭제 (캐스케이드)
/// - `POST /post/{id}/like` - 좋아요 (멱등)
/// - `DELETE /post/{id}/like` - 좋아요 취소 (멱등)
/// - `GET /post/{id}/like` - 좋아요 여부 조회
/// - `GET /post/{id}/likes/count` - 카운터 + 원장 실측값
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/post")
            .wrap(AuthMiddleware::optional())
            // 좋아요 라우트를 먼저 등록 (더 구체적인 경로)
            .service(handlers::likes::like_post)
            .service(handlers::likes::unlike_post)
            .service(handlers::likes::get_like_status)
            .service(handlers::likes::get_like_count)
            // 게시물 라우트
            .service(handlers::posts::create_post)
            .service(handlers::posts::get_post)
            .service(handlers::posts::delete_post)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "social_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "social_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
