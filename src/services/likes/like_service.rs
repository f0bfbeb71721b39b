//! # 좋아요 서비스 구현
//!
//! 좋아요 원장과 비정규화 카운터의 정합성을 책임지는 비즈니스 로직입니다.
//!
//! ## 멱등성 규칙
//!
//! - 이미 좋아요한 게시물을 다시 좋아요 → 상태 변화 없이 현재 상태 반환
//! - 좋아요하지 않은 게시물을 취소 → 상태 변화 없이 현재 상태 반환
//! - 동시 좋아요 경쟁의 패자(E11000) → 멱등 성공으로 처리
//!
//! ## 카운터 규칙
//!
//! 카운터는 원장 삽입/삭제가 실제로 일어났을 때만 증감합니다.
//! 감소는 `like_count > 0` 가드가 있어 음수가 될 수 없습니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::{
        dto::likes::response::{LikeCountResponse, LikeStatusResponse},
        entities::likes::post_like::PostLike,
    },
    repositories::{
        likes::like_repo::{InsertOutcome, LikeRepository},
        posts::post_repo::PostRepository,
    },
};

/// 좋아요 비즈니스 로직 서비스
#[service(name = "like")]
pub struct LikeService {
    /// 좋아요 원장 리포지토리 (자동 주입)
    like_repo: Arc<LikeRepository>,

    /// 게시물 리포지토리 (자동 주입)
    post_repo: Arc<PostRepository>,
}

impl LikeService {
    /// 게시물 좋아요 (멱등)
    ///
    /// 원장 삽입이 실제로 일어난 경우에만 카운터를 증가시킵니다.
    /// 유니크 인덱스 경합의 패자는 이미 좋아요된 상태로 간주합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(LikeStatusResponse)` - `liked: true`와 현재 카운터
    /// * `Err(AppError::NotFound)` - 게시물이 존재하지 않음
    pub async fn like(&self, user_id: &str, post_id: &str) -> Result<LikeStatusResponse, AppError> {
        let (user_oid, post_oid) = Self::parse_ids(user_id, post_id)?;

        // 게시물 존재 확인
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let like = PostLike::new(user_oid, post_oid);

        match self.like_repo.insert(&like).await? {
            InsertOutcome::Inserted => {
                self.post_repo.increment_like_count(&post_oid).await?;
                log::debug!("좋아요 추가: user={} post={}", user_id, post_id);
            }
            InsertOutcome::Duplicate => {
                // 이미 좋아요 상태, 카운터 불변
                log::debug!("좋아요 중복 (멱등 처리): user={} post={}", user_id, post_id);
            }
        }

        self.status(&post_oid, true).await
    }

    /// 게시물 좋아요 취소 (멱등)
    ///
    /// 원장 행이 실제로 삭제된 경우에만 카운터를 감소시킵니다.
    pub async fn unlike(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<LikeStatusResponse, AppError> {
        let (user_oid, post_oid) = Self::parse_ids(user_id, post_id)?;

        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        if self.like_repo.delete(&user_oid, &post_oid).await? {
            self.post_repo.decrement_like_count(&post_oid).await?;
            log::debug!("좋아요 취소: user={} post={}", user_id, post_id);
        }

        self.status(&post_oid, false).await
    }

    /// 호출자의 좋아요 여부와 현재 카운터 조회
    pub async fn is_liked(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<LikeStatusResponse, AppError> {
        let (user_oid, post_oid) = Self::parse_ids(user_id, post_id)?;

        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let liked = self.like_repo.exists(&user_oid, &post_oid).await?;

        self.status(&post_oid, liked).await
    }

    /// 게시물 좋아요 카운트 조회
    ///
    /// 비정규화 카운터(`like_count`)와 원장 실측값(`actual_count`)을
    /// 함께 반환합니다. 두 값의 차이로 드리프트를 관찰할 수 있습니다.
    pub async fn count_likes(&self, post_id: &str) -> Result<LikeCountResponse, AppError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let post_oid = post.id.ok_or_else(|| {
            AppError::InternalError("게시물 ID가 없습니다".to_string())
        })?;

        let actual_count = self.like_repo.count_by_post(&post_oid).await?;

        if post.like_count != actual_count {
            log::warn!(
                "좋아요 카운터 드리프트 감지: post={} counter={} ledger={}",
                post_id, post.like_count, actual_count
            );
        }

        Ok(LikeCountResponse {
            like_count: post.like_count,
            actual_count,
        })
    }

    /// 증감 이후의 최신 카운터로 상태 응답을 구성합니다.
    async fn status(
        &self,
        post_oid: &ObjectId,
        liked: bool,
    ) -> Result<LikeStatusResponse, AppError> {
        let post = self
            .post_repo
            .find_by_id(&post_oid.to_hex())
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        Ok(LikeStatusResponse {
            liked,
            like_count: post.like_count,
        })
    }

    fn parse_ids(user_id: &str, post_id: &str) -> Result<(ObjectId, ObjectId), AppError> {
        let user_oid = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;
        let post_oid = ObjectId::parse_str(post_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        Ok((user_oid, post_oid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids_rejects_malformed_input() {
        let valid = "507f1f77bcf86cd799439011";

        assert!(LikeService::parse_ids(valid, valid).is_ok());

        match LikeService::parse_ids("not-an-id", valid) {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "유효하지 않은 ID 형식입니다");
            }
            other => panic!("잘못된 ID는 400이어야 합니다: {:?}", other),
        }

        assert!(LikeService::parse_ids(valid, "").is_err());
    }
}
