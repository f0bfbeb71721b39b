//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── users/   ← User 엔티티 (users 컬렉션)
//! ├── posts/   ← Post 엔티티 (posts 컬렉션, 비정규화 like_count 보유)
//! └── likes/   ← PostLike 엔티티 (post_likes 컬렉션, 좋아요 원장)
//! ```
//!
//! ## 싱글톤 매크로 연동
//!
//! 이 엔티티들은 `#[repository]` 매크로와 함께 사용됩니다:
//!
//! ```rust,ignore
//! use crate::domain::entities::likes::PostLike;
//!
//! #[repository(name = "like", collection = "post_likes")]
//! struct LikeRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! impl LikeRepository {
//!     async fn exists(&self, user_id: &ObjectId, post_id: &ObjectId) -> AppResult<bool> {
//!         let found = self.collection::<PostLike>()
//!             .find_one(doc! { "user_id": user_id, "post_id": post_id })
//!             .await?;
//!         Ok(found.is_some())
//!     }
//! }
//! ```
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//! - **인덱스 설계**: 유니크 제약은 애플리케이션 검사가 아닌 DB 인덱스로 보장
//! - **데이터 일관성**: `like_count`는 원장 행 전이가 있을 때만 변경

pub mod users;
pub mod posts;
pub mod likes;
