//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 사용자 저장소는 `UserStore` 트레이트 아래 MongoDB 구현과 인메모리 구현을,
//! 세션 저장소는 `actix-session`의 `SessionStore` 인메모리 구현을 제공합니다.
//! 서비스 계층은 `Arc<dyn UserStore>`만 보유하므로 테스트에서는 인메모리 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserStore, user_repo::UserRepository};
//!
//! let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! users.init().await?;
//! let user = users.find_by_username("alice").await?;
//! ```

pub mod users;
pub mod sessions;
