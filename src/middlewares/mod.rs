//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 세션 복원과 로그인 가드를 담당합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 세션 사용자 복원 (CurrentUserMiddleware)
//! - `actix-session`이 복원한 세션에서 사용자 ID를 읽음
//! - 사용자 ID를 사용자 레코드로 복원해 request extension에 저장
//!
//! ### 2. 인증 가드 (AuthMiddleware)
//! - 복원된 사용자가 없으면 로그인 페이지로 303 리다이렉트
//!
//! 세션 쿠키 검증, 세션 저장, 토큰 재발급과 삭제는 `actix_session::SessionMiddleware`가 담당합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::{AuthMiddleware, CurrentUserMiddleware};
//!
//! cfg.service(
//!     web::scope("")
//!         .wrap(CurrentUserMiddleware::new(state.users.clone()))
//!         .wrap(session_middleware(store, key, &config.session))
//!         .service(
//!             web::resource("/submit")
//!                 .wrap(AuthMiddleware::required())
//!                 .route(web::get().to(submit_form))
//!         )
//! );
//! ```
//!
//! `wrap`은 나중에 호출한 것이 바깥쪽이므로 세션 미들웨어를 마지막에 감쌉니다.

pub mod current_user_middleware;
mod current_user_inner;
pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use current_user_middleware::CurrentUserMiddleware;
pub use auth_middleware::AuthMiddleware;
