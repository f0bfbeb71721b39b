//! # Core Framework Module
//!
//! 백엔드 서비스의 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! 의존성 주입 컨테이너와 통합 에러 처리를 담당합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 전역 싱글톤 컨테이너
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//! - **의존성 해결**: `Arc<T>` 타입 기반 자동 의존성 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **자동 변환**: thiserror 기반 에러 체인 관리
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! #[repository(name = "like", collection = "post_likes")]
//! struct LikeRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! #[service(name = "like")]
//! struct LikeService {
//!     like_repo: Arc<LikeRepository>,  // 자동 주입
//!     post_repo: Arc<PostRepository>,  // 자동 주입
//! }
//!
//! let like_service = LikeService::instance();
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
