//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스들은 저장소 트레이트 객체(`Arc<dyn UserStore>` 등)와 설정값을
//! 생성자로 전달받습니다. 시작 시 [`AppState`](crate::core::AppState)에서 한 번
//! 조립되어 요청 간에 공유됩니다.
//!
//! # Features
//!
//! - 로컬 가입/로그인 (bcrypt)
//! - OAuth 2.0 소셜 로그인 (Google, Twitter)
//! - OAuth 계정과 사용자 레코드 연결 (find-or-create)
//! - 서버 측 세션 설정 (`actix-session` 암호화 쿠키)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(users.clone(), config.bcrypt_cost);
//! let user = user_service.register("alice", "pw1").await?;
//! ```

pub mod users;
pub mod auth;
