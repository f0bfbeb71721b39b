//! 게시물 관리 서비스 구현
//!
//! 좋아요 대상이 되는 게시물의 생성, 조회, 삭제를 담당합니다.
//! 게시물 삭제 시 해당 게시물의 좋아요 원장 행도 함께 정리합니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::{
        dto::posts::response::PostResponse,
        entities::posts::post::Post,
    },
    repositories::{
        likes::like_repo::LikeRepository,
        posts::post_repo::PostRepository,
    },
};
use mongodb::bson::oid::ObjectId;

/// 게시물 관리 비즈니스 로직 서비스
#[service(name = "post")]
pub struct PostService {
    /// 게시물 리포지토리 (자동 주입)
    post_repo: Arc<PostRepository>,

    /// 좋아요 원장 리포지토리 (자동 주입, 캐스케이드 삭제용)
    like_repo: Arc<LikeRepository>,
}

impl PostService {
    /// 새 게시물 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(PostResponse)` - 생성된 게시물 (like_count = 0)
    /// * `Err(AppError::ValidationError)` - 잘못된 작성자 ID 형식
    pub async fn create_post(
        &self,
        author_id: &str,
        content: String,
    ) -> Result<PostResponse, AppError> {
        let author_object_id = ObjectId::parse_str(author_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let post = Post::new(author_object_id, content);
        let created = self.post_repo.create(post).await?;

        Ok(PostResponse::from(created))
    }

    /// ID로 게시물 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(PostResponse)` - 게시물 DTO
    /// * `Err(AppError::NotFound)` - 해당 ID의 게시물이 존재하지 않음
    pub async fn get_post(&self, id: &str) -> Result<PostResponse, AppError> {
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        Ok(PostResponse::from(post))
    }

    /// 게시물 삭제 (캐스케이드)
    ///
    /// 원장 행을 먼저 삭제한 뒤 게시물 문서를 삭제합니다.
    /// 게시물이 사라지면 카운터도 함께 사라지므로 별도 감소는
    /// 필요하지 않습니다.
    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let post_object_id = post.id.ok_or_else(|| {
            AppError::InternalError("게시물 ID가 없습니다".to_string())
        })?;

        let removed = self.like_repo.delete_by_post(&post_object_id).await?;

        let deleted = self.post_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("게시물을 찾을 수 없습니다".to_string()));
        }

        log::info!("✅ 게시물 삭제 완료: {} (좋아요 {}건 정리)", id, removed);

        Ok(())
    }
}
