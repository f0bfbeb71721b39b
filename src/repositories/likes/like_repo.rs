//! # 좋아요 원장 리포지토리 구현
//!
//! `post_likes` 컬렉션의 데이터 액세스 계층입니다.
//!
//! `(user_id, post_id)` 유니크 인덱스가 "한 사용자, 한 게시물, 최대
//! 한 개의 좋아요" 불변식을 강제합니다. 동시 좋아요 경쟁의 패자는
//! E11000으로 식별되고, 서비스 계층이 이를 멱등 성공으로 처리합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, IndexModel, options::IndexOptions};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::likes::post_like::PostLike,
    repositories::is_duplicate_key_error,
};
use singleton_macro::repository;

/// 원장 삽입 시도의 결과
///
/// 유니크 인덱스 경합에서 진 삽입은 에러가 아니라 `Duplicate`로
/// 구분되어 서비스 계층의 멱등 처리로 이어집니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsertOutcome {
    /// 새 원장 행이 삽입됨
    Inserted,
    /// 동일한 `(user_id, post_id)` 행이 이미 존재함
    Duplicate,
}

/// 좋아요 원장 데이터 액세스 리포지토리
#[repository(name = "like", collection = "post_likes")]
pub struct LikeRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl LikeRepository {
    /// 해당 사용자가 게시물을 좋아요했는지 확인
    pub async fn exists(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
    ) -> Result<bool, AppError> {
        let like = self.collection::<PostLike>()
            .find_one(doc! { "user_id": user_id, "post_id": post_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(like.is_some())
    }

    /// 원장 행 삽입
    ///
    /// 중복 키 에러(E11000)는 실패가 아니라 [`InsertOutcome::Duplicate`]로
    /// 반환됩니다.
    pub async fn insert(&self, like: &PostLike) -> Result<InsertOutcome, AppError> {
        match self.collection::<PostLike>().insert_one(like).await {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) if is_duplicate_key_error(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    /// 원장 행 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 행이 삭제됨 (좋아요 상태였음)
    /// * `Ok(false)` - 삭제할 행이 없음 (이미 취소된 상태)
    pub async fn delete(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
    ) -> Result<bool, AppError> {
        let result = self.collection::<PostLike>()
            .delete_one(doc! { "user_id": user_id, "post_id": post_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 게시물의 원장 실측 카운트
    ///
    /// 비정규화 카운터와 별개로 원장 행 수를 직접 셉니다.
    pub async fn count_by_post(&self, post_id: &ObjectId) -> Result<i64, AppError> {
        let count = self.collection::<PostLike>()
            .count_documents(doc! { "post_id": post_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count as i64)
    }

    /// 게시물의 모든 원장 행 삭제 (게시물 삭제 캐스케이드)
    pub async fn delete_by_post(&self, post_id: &ObjectId) -> Result<u64, AppError> {
        let result = self.collection::<PostLike>()
            .delete_many(doc! { "post_id": post_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    /// 사용자의 모든 원장 행 삭제 (계정 삭제 캐스케이드)
    pub async fn delete_by_user(&self, user_id: &ObjectId) -> Result<u64, AppError> {
        let result = self.collection::<PostLike>()
            .delete_many(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    /// 사용자가 좋아요한 게시물 ID 목록
    ///
    /// 계정 삭제 캐스케이드에서 감소시킬 카운터 대상을 구하는 데
    /// 사용됩니다. 원장 행 삭제 전에 호출해야 합니다.
    pub async fn post_ids_for_user(
        &self,
        user_id: &ObjectId,
    ) -> Result<Vec<ObjectId>, AppError> {
        let likes: Vec<PostLike> = self.collection::<PostLike>()
            .find(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(likes.into_iter().map(|like| like.post_id).collect())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. `(user_id, post_id)` 유니크 인덱스 - 중복 좋아요 방지의 진실의 원천
    /// 2. `post_id` 인덱스 - 게시물별 카운트와 캐스케이드 삭제 지원
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_post_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "post_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_post_unique".to_string())
                .build())
            .build();

        let post_index = IndexModel::builder()
            .keys(doc! { "post_id": 1 })
            .options(IndexOptions::builder()
                .name("post_id_idx".to_string())
                .build())
            .build();

        self.collection::<PostLike>()
            .create_indexes([user_post_index, post_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
