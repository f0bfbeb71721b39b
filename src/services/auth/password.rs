//! bcrypt 기반 시크릿 해싱 유틸리티
//!
//! 비밀번호와 리프레시 토큰이 동일한 해싱 경로를 사용합니다.
//! 저장소에는 항상 bcrypt 해시만 저장되며 원문은 저장되지 않습니다.
//! 비용 계수는 환경별로 다릅니다 ([`PasswordConfig::bcrypt_cost`] 참고).

use crate::config::PasswordConfig;
use crate::core::errors::AppError;

/// 시크릿을 bcrypt로 해싱합니다.
///
/// 비밀번호 저장과 리프레시 토큰 at-rest 저장에 공통으로 사용됩니다.
pub fn hash_secret(secret: &str) -> Result<String, AppError> {
    bcrypt::hash(secret, PasswordConfig::bcrypt_cost())
        .map_err(|e| AppError::InternalError(format!("해싱 실패: {}", e)))
}

/// 시크릿이 저장된 bcrypt 해시와 일치하는지 검증합니다.
pub fn verify_secret(secret: &str, hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(secret, hash)
        .map_err(|e| AppError::InternalError(format!("해시 검증 실패: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_secret("correct horse battery staple").unwrap();
        assert_ne!(hash, "correct horse battery staple");
        assert!(verify_secret("correct horse battery staple", &hash).unwrap());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let hash = hash_secret("password123").unwrap();
        assert!(!verify_secret("password124", &hash).unwrap());
    }
}
