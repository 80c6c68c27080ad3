//! 서버 측 세션 저장소
//!
//! `actix-session`의 [`SessionStore`](actix_session::storage::SessionStore) 구현체들입니다.
//!
//! - [`RedisSessionStore`](actix_session::storage::RedisSessionStore): 운영용 (`actix-session` 제공)
//! - [`MemorySessionStore`](memory_session_repo::MemorySessionStore): 단일 프로세스용

pub mod memory_session_repo;

pub use memory_session_repo::MemorySessionStore;
