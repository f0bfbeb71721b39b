//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - 인증, OAuth, JWT 관련 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전 (프로덕션 누락 시 경고 또는 패닉)
//! - 런타임 설정값 파싱 오류는 기본값으로 폴백
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정 (액세스/리프레시 비밀키는 서로 달라야 합니다)
//! export JWT_ACCESS_SECRET="your-access-secret"
//! export JWT_REFRESH_SECRET="your-refresh-secret"
//! export JWT_ACCESS_EXPIRATION_MINUTES="15"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//!
//! # Google OAuth
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! export GOOGLE_REDIRECT_URI="https://yourdomain.com/auth/google/callback"
//! export FRONTEND_URL="https://yourdomain.com"
//!
//! # 선택적 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="10"          # 4-15 범위
//! export OAUTH_STATE_SECRET="oauth-secret"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
