//! 서버 측 세션 설정
//!
//! 세션 쿠키는 `actix-session`의 private 쿠키(암호화 + 인증)로 세션 키만 담고,
//! 세션 내용은 저장소(Redis 또는 메모리)에 보관합니다.
//!
//! - 쿠키 키: `SHA-512(SESSION_SECRET)` 64바이트
//! - 위조되거나 복호화할 수 없는 쿠키는 무시되고 익명 요청으로 처리됩니다
//! - 비어 있는 세션은 저장하지 않으므로 익명 방문자에게는 쿠키가 발급되지 않습니다

use actix_session::{
    config::PersistentSession,
    storage::{RedisSessionStore, SessionStore},
    SessionMiddleware,
};
use actix_web::cookie::{time::Duration, Key, SameSite};
use sha2::{Digest, Sha512};
use crate::{
    config::SessionConfig,
    errors::{AppResult, ErrorContext},
    repositories::sessions::MemorySessionStore,
};

/// 세션 레코드 저장소
#[derive(Clone)]
pub enum SessionBackendStore {
    Redis(RedisSessionStore),
    Memory(MemorySessionStore),
}

impl SessionBackendStore {
    pub fn name(&self) -> &'static str {
        match self {
            SessionBackendStore::Redis(_) => "Redis",
            SessionBackendStore::Memory(_) => "Memory",
        }
    }
}

/// 세션 비밀 값에서 쿠키 암호화 키를 만듭니다
///
/// 같은 비밀 값이면 재시작 후에도 같은 키가 나오므로 기존 쿠키가 유지됩니다.
pub fn session_key(secret: &str) -> AppResult<Key> {
    let digest = Sha512::digest(secret.as_bytes());
    Key::try_from(digest.as_slice()).context("세션 쿠키 키 생성 실패")
}

/// 설정값으로 세션 미들웨어를 만듭니다
pub fn session_middleware<S>(store: S, key: Key, config: &SessionConfig) -> SessionMiddleware<S>
where
    S: SessionStore + 'static,
{
    let ttl = Duration::seconds(i64::try_from(config.ttl_seconds).unwrap_or(i64::MAX));

    SessionMiddleware::builder(store, key)
        .cookie_name(config.cookie_name.clone())
        .cookie_path("/".to_string())
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .cookie_secure(config.cookie_secure)
        .session_lifecycle(PersistentSession::default().session_ttl(ttl))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_is_stable_per_secret() {
        let first = session_key("secret-a").unwrap();
        let again = session_key("secret-a").unwrap();
        let other = session_key("secret-b").unwrap();

        assert_eq!(first.master(), again.master());
        assert_ne!(first.master(), other.master());
    }

    #[test]
    fn test_short_secret_still_yields_full_key() {
        let key = session_key("x").unwrap();
        assert_eq!(key.master().len(), 64);
    }

    #[test]
    fn test_store_names() {
        let store = SessionBackendStore::Memory(MemorySessionStore::new());
        assert_eq!(store.name(), "Memory");
    }
}
