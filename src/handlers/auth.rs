//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 로컬 인증과 OAuth 2.0 인증을 모두 지원하며, JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/auth/login` | 이메일/비밀번호 로그인 | 200 OK |
//! | `POST` | `/auth/refresh` | 토큰 갱신 (일회용 회전) | 200 OK |
//! | `POST` | `/auth/logout` | 로그아웃 (fail-open) | 204 No Content |
//! | `GET` | `/auth/google` | Google 인증 페이지로 리다이렉트 | 302 Found |
//! | `GET` | `/auth/google/callback` | OAuth 콜백 처리 | 302 Found |
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::auth::{
    request::{LoginRequest, OAuthCallbackQuery, RefreshTokenRequest},
    response::TokenRefreshResponse,
};
use crate::services::auth::{GoogleAuthService, SessionService};

/// 로컬 로그인 핸들러
///
/// 이메일과 비밀번호를 검증하고 토큰 쌍과 사용자 프로필을 반환합니다.
/// 새 로그인은 저장된 리프레시 토큰 해시를 덮어써서 이전 기기의
/// 세션을 무효화합니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let session_service = SessionService::instance();
    let response = session_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증하고 새 토큰 쌍을 발급합니다. 사용된
/// 리프레시 토큰은 회전되어 재사용할 수 없습니다. 모든 갱신 실패는
/// 동일한 401 응답으로 수렴합니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh(
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let session_service = SessionService::instance();
    let tokens = session_service.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(TokenRefreshResponse::from(tokens)))
}

/// 로그아웃 핸들러
///
/// 저장된 리프레시 토큰 해시를 제거합니다. 토큰이 이미 만료되었거나
/// 유효하지 않아도 204를 반환합니다 (fail-open). 본문에 `refreshToken`
/// 필드 자체가 없을 때만 400입니다.
///
/// # Endpoint
/// `POST /auth/logout`
#[post("/logout")]
pub async fn logout(
    payload: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.ok_or_else(|| {
        AppError::ValidationError("refreshToken은(는) 필수입니다".to_string())
    })?;

    if payload.refresh_token.is_empty() {
        return Err(AppError::ValidationError("refreshToken은(는) 필수입니다".to_string()));
    }

    let session_service = SessionService::instance();
    session_service.logout(&payload.refresh_token).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Google OAuth 로그인 시작 핸들러
///
/// state를 생성하고 Google 인증 페이지로 리다이렉트합니다.
///
/// # Endpoint
/// `GET /auth/google`
#[get("/google")]
pub async fn google_login() -> Result<HttpResponse, AppError> {
    let google_service = GoogleAuthService::instance();
    let login_url = google_service.get_login_url()?;

    Ok(HttpResponse::Found()
        .append_header(("Location", login_url))
        .finish())
}

/// Google OAuth 콜백 처리 핸들러
///
/// 인증 성공 시 토큰을 URL 프래그먼트에 담아 프론트엔드로
/// 리다이렉트하고, 모든 실패는 로그인 페이지의 에러 쿼리로
/// 리다이렉트합니다. 이 엔드포인트는 JSON을 반환하지 않습니다.
///
/// # Endpoint
/// `GET /auth/google/callback?code={code}&state={state}`
#[get("/google/callback")]
pub async fn google_callback(
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let failure = || {
        HttpResponse::Found()
            .append_header(("Location", GoogleAuthService::failure_redirect_url()))
            .finish()
    };

    // 사용자가 인증을 거부했거나 Google이 에러를 반환한 경우
    if let Some(error) = &query.error {
        log::warn!("Google OAuth 에러: {}", error);
        return Ok(failure());
    }

    let (code, state) = match (query.code.as_deref(), query.state.as_deref()) {
        (Some(code), Some(state)) if !code.is_empty() => (code, state),
        _ => {
            log::warn!("Google OAuth 콜백에 code/state 누락");
            return Ok(failure());
        }
    };

    let google_service = GoogleAuthService::instance();
    let session_service = SessionService::instance();

    let user = match google_service.authenticate_with_code(code, state).await {
        Ok(user) => user,
        Err(e) => {
            log::warn!("Google OAuth 인증 실패: {}", e);
            return Ok(failure());
        }
    };

    let tokens = match session_service.issue_session(&user).await {
        Ok(tokens) => tokens,
        Err(e) => {
            log::error!("OAuth 세션 발급 실패: {}", e);
            return Ok(failure());
        }
    };

    log::info!("Google OAuth 로그인 성공: {}", user.email);

    Ok(HttpResponse::Found()
        .append_header((
            "Location",
            GoogleAuthService::success_redirect_url(&tokens.access_token, &tokens.refresh_token),
        ))
        .finish())
}
