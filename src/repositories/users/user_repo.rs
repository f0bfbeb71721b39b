//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, ID 조회에 한해 Redis 캐싱을 지원합니다.
//!
//! ## 캐싱 전략
//!
//! - **ID 조회만 캐싱**: `find_by_id`는 10분 TTL로 캐싱되며
//!   모든 변경 연산에서 무효화됩니다.
//! - **이메일 조회는 캐싱하지 않음**: 로그인/리프레시 경로는 최신
//!   `refresh_token_hash`를 읽어야 하므로 항상 DB로 갑니다.
//!   토큰 회전 직후 오래된 해시를 읽으면 정상 갱신이 401로 거부됩니다.

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId, DateTime}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    config::OAuthProvider,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
    repositories::is_duplicate_key_error,
};
use singleton_macro::repository;

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산과 세션/OAuth 관련 부분 업데이트를 담당합니다.
///
/// ## 인덱스
///
/// - `email` (unique)
/// - `username` (unique)
/// - `google_id` / `facebook_id` (unique + sparse)
/// - `created_at` (desc)
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 이메일 주소로 사용자 조회
    ///
    /// 호출 전에 이메일을 소문자로 정규화해야 합니다.
    ///
    /// 세션 경로가 최신 `refresh_token_hash`를 필요로 하므로
    /// 이 조회는 캐싱하지 않습니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자명으로 사용자 조회
    ///
    /// 사용자명은 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    /// 회원가입 중복 확인과 OAuth 사용자명 생성에 사용됩니다.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// 가장 빈번한 조회 패턴이므로 10분 TTL 캐싱을 적용합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let user = self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장 (10분)
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, 600)
                .await;
        }

        Ok(user)
    }

    /// OAuth 공급자 ID로 사용자 조회
    ///
    /// 공급자별 필드(`google_id` / `facebook_id`)의 유니크+스파스
    /// 인덱스를 사용합니다.
    pub async fn find_by_provider_id(
        &self,
        provider: &OAuthProvider,
        provider_id: &str,
    ) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { provider.id_field(): provider_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 이메일과 사용자명의 중복 여부를 사전에 검증합니다.
    /// 사전 검증을 통과했더라도 동시 가입 경쟁에서 유니크 인덱스에
    /// 패배할 수 있으며, 이 경우에도 409로 변환됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 또는 사용자명 중복
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        // 중복 확인
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        // DB에 저장
        let result = match self.collection::<User>().insert_one(&user).await {
            Ok(result) => result,
            // 동시 가입 경쟁의 패자도 동일한 409
            Err(e) if is_duplicate_key_error(&e) => {
                return Err(AppError::ConflictError(
                    "이미 사용 중인 이메일입니다".to_string(),
                ));
            }
            Err(e) => return Err(AppError::DatabaseError(e.to_string())),
        };

        user.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("insert_one이 ObjectId를 반환하지 않았습니다".to_string())
        })?);

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(user)
    }

    /// 리프레시 토큰 해시 설정 또는 제거
    ///
    /// - `Some(hash)`: 새 세션 발급 (이전 세션은 덮어써서 무효화)
    /// - `None`: 로그아웃 (활성 세션 제거)
    pub async fn set_refresh_token_hash(
        &self,
        id: &str,
        refresh_token_hash: Option<&str>,
    ) -> Result<(), AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let update = match refresh_token_hash {
            Some(hash) => doc! {
                "$set": { "refresh_token_hash": hash, "updated_at": DateTime::now() }
            },
            None => doc! {
                "$unset": { "refresh_token_hash": "" },
                "$set": { "updated_at": DateTime::now() }
            },
        };

        self.collection::<User>()
            .update_one(doc! { "_id": object_id }, update)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        let _ = self.invalidate_cache(id).await;

        Ok(())
    }

    /// 기존 계정에 OAuth 공급자 ID 연결
    ///
    /// 공급자 이메일이 기존 로컬 계정과 일치할 때 호출되며,
    /// 업데이트된 사용자를 반환합니다.
    pub async fn link_provider(
        &self,
        id: &str,
        provider: &OAuthProvider,
        provider_id: &str,
    ) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self.collection::<User>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": {
                    provider.id_field(): provider_id,
                    "updated_at": DateTime::now()
                } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        if updated_user.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated_user)
    }

    /// 사용자 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 사용자가 성공적으로 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 존재하지 않음
    ///
    /// 연관 데이터(게시물, 좋아요 원장)의 정리는 서비스 계층의
    /// 캐스케이드 순서에 따라 이 호출 전에 이루어져야 합니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<User>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            // 캐시 무효화
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. `email` 유니크 인덱스 - 중복 이메일 방지
    /// 2. `username` 유니크 인덱스 - 중복 사용자명 방지
    /// 3. `google_id` / `facebook_id` 유니크+스파스 인덱스 -
    ///    공급자 계정당 하나의 사용자 보장 (필드가 없는 문서는 제외)
    /// 4. `created_at` 내림차순 인덱스 - 최근 사용자 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let google_id_index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("google_id_unique_sparse".to_string())
                .build())
            .build();

        let facebook_id_index = IndexModel::builder()
            .keys(doc! { "facebook_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("facebook_id_unique_sparse".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([
                email_index,
                username_index,
                google_id_index,
                facebook_id_index,
                created_at_index,
            ])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
