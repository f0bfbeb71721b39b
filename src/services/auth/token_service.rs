//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 생성과 검증을 담당합니다.
//! 두 토큰은 서로 다른 시크릿으로 서명되므로 교차 사용이 불가능합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::models::token::{TokenClaims, TokenPair},
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용합니다. 액세스 토큰(15분)과
/// 리프레시 토큰(7일)은 각각 전용 시크릿으로 서명됩니다.
///
/// 클레임은 `sub`(사용자 ID), `iat`, `exp`만 담습니다.
/// 권한 정보는 토큰이 아니라 요청 시점의 DB 조회로 결정합니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    pub fn issue_access_token(&self, user_id: &str) -> Result<String, AppError> {
        self.issue(
            user_id,
            &JwtConfig::access_secret(),
            Duration::minutes(JwtConfig::access_expiration_minutes()),
        )
    }

    /// 리프레시 토큰 발급
    ///
    /// 발급된 토큰의 bcrypt 해시는 세션 서비스가 사용자 문서에
    /// 저장합니다. 원문은 클라이언트에게만 전달됩니다.
    pub fn issue_refresh_token(&self, user_id: &str) -> Result<String, AppError> {
        self.issue(
            user_id,
            &JwtConfig::refresh_secret(),
            Duration::days(JwtConfig::refresh_expiration_days()),
        )
    }

    /// 토큰 쌍 발급 (액세스 + 리프레시)
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::instance();
    /// let tokens = token_service.issue_pair(&user_id)?;
    /// ```
    pub fn issue_pair(&self, user_id: &str) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(user_id)?,
            refresh_token: self.issue_refresh_token(user_id)?,
        })
    }

    fn issue(
        &self,
        user_id: &str,
        secret: &str,
        lifetime: Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 잘못된 서명/형식
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify(token, &JwtConfig::access_secret())
    }

    /// 리프레시 토큰 검증 및 클레임 추출
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify(token, &JwtConfig::refresh_secret())
    }

    fn verify(&self, token: &str, secret: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                // 서명/형식 오류는 모두 401로 수렴 (공격자에게 세부 정보 비노출)
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token(auth_header)?;
    /// let claims = token_service.verify_access_token(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService {}
    }

    fn setup_secrets() {
        unsafe {
            std::env::set_var("JWT_ACCESS_SECRET", "test-access-secret");
            std::env::set_var("JWT_REFRESH_SECRET", "test-refresh-secret");
        }
    }

    #[test]
    fn test_access_token_roundtrip() {
        setup_secrets();
        let service = service();

        let token = service.issue_access_token("507f1f77bcf86cd799439011").unwrap();
        let claims = service.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, "507f1f77bcf86cd799439011");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_is_not_valid_as_access_token() {
        setup_secrets();
        let service = service();

        let refresh = service.issue_refresh_token("507f1f77bcf86cd799439011").unwrap();
        let result = service.verify_access_token(&refresh);

        match result {
            Err(AppError::AuthenticationError(msg)) => {
                assert_eq!(msg, "유효하지 않은 토큰입니다");
            }
            other => panic!("서명 불일치가 401로 수렴해야 합니다: {:?}", other),
        }
    }

    #[test]
    fn test_expired_token_is_rejected_with_expiry_message() {
        setup_secrets();
        let service = service();

        // 이미 만료된 토큰을 직접 서명
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-access-secret".as_ref()),
        )
        .unwrap();

        match service.verify_access_token(&token) {
            Err(AppError::AuthenticationError(msg)) => {
                assert_eq!(msg, "토큰이 만료되었습니다");
            }
            other => panic!("만료 토큰이 거부되어야 합니다: {:?}", other),
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
