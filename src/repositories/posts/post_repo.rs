//! # 게시물 리포지토리 구현
//!
//! 게시물 엔티티의 데이터 액세스 계층입니다.
//!
//! 좋아요 카운터(`like_count`)는 좋아요 원장에서 파생된 비정규화 값이며,
//! 읽기-수정-쓰기 대신 MongoDB의 원자적 `$inc` 연산으로만 변경됩니다.
//! 카운터의 최신성이 좋아요 응답에 직접 노출되므로 이 리포지토리의
//! 조회는 캐싱하지 않습니다.

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId}, IndexModel, options::IndexOptions};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::posts::post::Post,
};
use singleton_macro::repository;

/// 게시물 데이터 액세스 리포지토리
#[repository(name = "post", collection = "posts")]
pub struct PostRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl PostRepository {
    /// ID로 게시물 조회
    ///
    /// `like_count`가 좋아요 응답에 그대로 노출되므로 항상 DB에서 읽습니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<Post>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 게시물 생성
    pub async fn create(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self.collection::<Post>()
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        post.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("insert_one이 ObjectId를 반환하지 않았습니다".to_string())
        })?);

        Ok(post)
    }

    /// 게시물 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 게시물이 성공적으로 삭제됨
    /// * `Ok(false)` - 해당 ID의 게시물이 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Post>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 좋아요 카운터 원자적 증가
    ///
    /// 원장 삽입이 성공한 경우에만 호출됩니다.
    pub async fn increment_like_count(&self, post_id: &ObjectId) -> Result<(), AppError> {
        self.collection::<Post>()
            .update_one(
                doc! { "_id": post_id },
                doc! { "$inc": { "like_count": 1 } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 좋아요 카운터 원자적 감소
    ///
    /// 필터에 `like_count > 0` 가드를 포함하여 동시 취소 경쟁에서도
    /// 카운터가 음수로 내려가지 않습니다. 가드에 걸려 매칭되는 문서가
    /// 없으면(이미 0) 그대로 성공으로 처리합니다.
    pub async fn decrement_like_count(&self, post_id: &ObjectId) -> Result<(), AppError> {
        self.collection::<Post>()
            .find_one_and_update(
                doc! { "_id": post_id, "like_count": { "$gt": 0 } },
                doc! { "$inc": { "like_count": -1 } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// `author_id` 인덱스는 계정 삭제 캐스케이드의 게시물 조회를,
    /// `created_at` 내림차순 인덱스는 최신순 조회를 지원합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let author_index = IndexModel::builder()
            .keys(doc! { "author_id": 1 })
            .options(IndexOptions::builder()
                .name("author_id_idx".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection::<Post>()
            .create_indexes([author_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
