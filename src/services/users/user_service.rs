//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기(가입, 조회, 캐스케이드 삭제)를 담당하는
//! 비즈니스 로직을 구현합니다.
//!
//! ## 계정 삭제 캐스케이드
//!
//! 계정 삭제는 좋아요 원장과 비정규화 카운터의 정합성을 지키기 위해
//! 정해진 순서를 따릅니다:
//!
//! ```text
//! 1. 사용자가 좋아요한 게시물 ID 수집
//! 2. 사용자의 원장 행 일괄 삭제
//! 3. 수집한 게시물들의 like_count 가드 감소
//! 4. 사용자 문서 삭제
//! ```
//!
//! 중간 단계에서 실패하면 카운터가 원장보다 클 수 있으나, 가드 감소
//! 덕분에 음수로 내려가지는 않으며 카운트 조회의 `actual_count`로
//! 드리프트를 관찰할 수 있습니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::{
        dto::users::{
            request::CreateUserRequest,
            response::{CreateUserResponse, UserResponse},
        },
        entities::users::user::User,
    },
    repositories::{
        likes::like_repo::LikeRepository,
        posts::post_repo::PostRepository,
        users::user_repo::UserRepository,
    },
    services::auth::password::hash_secret,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 비밀번호 검증(로그인)은 `SessionService`의 책임이며,
/// 이 서비스는 계정 자체의 생성/조회/삭제만 다룹니다.
#[service(name = "user")]
pub struct UserService {
    /// 사용자 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,

    /// 게시물 리포지토리 (자동 주입, 캐스케이드 감소용)
    post_repo: Arc<PostRepository>,

    /// 좋아요 원장 리포지토리 (자동 주입, 캐스케이드 삭제용)
    like_repo: Arc<LikeRepository>,
}

impl UserService {
    /// 새 사용자 계정 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateUserResponse)` - 생성된 사용자 정보와 성공 메시지
    /// * `Err(AppError::ConflictError)` - 이메일 또는 사용자명 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<CreateUserResponse, AppError> {
        let start_time = std::time::Instant::now();

        let hash_start = std::time::Instant::now();
        let password_hash = hash_secret(&request.password)?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new_local(request.email, request.username, password_hash);

        let created_user = self.user_repo.create(user).await?;

        log::info!("Total user creation took: {:?}", start_time.elapsed());

        Ok(CreateUserResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 민감 정보가 제거된 사용자 DTO
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 계정 삭제 (캐스케이드)
    ///
    /// 좋아요 원장과 비정규화 카운터를 먼저 정리한 뒤 사용자 문서를
    /// 삭제합니다. 되돌릴 수 없는 작업입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 삭제 성공
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete_account(&self, id: &str) -> Result<(), AppError> {
        // 삭제 대상 확인 (없으면 404, 캐스케이드 진입 전에 걸러냄)
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let user_object_id = user.id.ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        // 1. 감소 대상 게시물을 원장 삭제 전에 수집
        let liked_post_ids = self.like_repo.post_ids_for_user(&user_object_id).await?;

        // 2. 원장 행 일괄 삭제
        let removed = self.like_repo.delete_by_user(&user_object_id).await?;

        // 3. 비정규화 카운터 감소
        for post_id in &liked_post_ids {
            self.post_repo.decrement_like_count(post_id).await?;
        }

        // 4. 사용자 문서 삭제
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("✅ 계정 삭제 완료: {} (좋아요 {}건 정리)", user.email, removed);

        Ok(())
    }
}
