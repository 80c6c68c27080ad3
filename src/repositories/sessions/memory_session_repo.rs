use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
    time::{Duration as StdDuration, Instant},
};
use actix_session::storage::{LoadError, SaveError, SessionKey, SessionStore, UpdateError};
use actix_web::cookie::time::Duration;
use anyhow::anyhow;
use uuid::Uuid;

type SessionState = HashMap<String, String>;

/// 인메모리 세션 저장소
///
/// 단일 프로세스용입니다. 만료된 레코드는 조회 시점과 새 세션 저장 시점에 제거됩니다.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, (SessionState, Instant)>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn expiry(ttl: &Duration) -> Instant {
        let seconds = u64::try_from(ttl.whole_seconds()).unwrap_or(0);
        Instant::now() + StdDuration::from_secs(seconds)
    }

    fn poisoned() -> anyhow::Error {
        anyhow!("session store lock poisoned")
    }

    fn insert_new(&self, state: SessionState, ttl: &Duration) -> anyhow::Result<SessionKey> {
        let key = Uuid::new_v4().simple().to_string();
        let now = Instant::now();

        let mut sessions = self.sessions.write().map_err(|_| Self::poisoned())?;
        sessions.retain(|_, (_, expires_at)| *expires_at > now);
        sessions.insert(key.clone(), (state, Self::expiry(ttl)));

        SessionKey::try_from(key).map_err(|e| anyhow!("invalid session key: {:?}", e))
    }
}

impl SessionStore for MemorySessionStore {
    async fn load(&self, session_key: &SessionKey) -> Result<Option<SessionState>, LoadError> {
        let key = session_key.as_ref();
        {
            let sessions = self.sessions.read().map_err(|_| LoadError::Other(Self::poisoned()))?;
            match sessions.get(key) {
                None => return Ok(None),
                Some((state, expires_at)) if *expires_at > Instant::now() => {
                    return Ok(Some(state.clone()));
                }
                Some(_) => {}
            }
        }

        self.sessions
            .write()
            .map_err(|_| LoadError::Other(Self::poisoned()))?
            .remove(key);
        Ok(None)
    }

    async fn save(&self, session_state: SessionState, ttl: &Duration) -> Result<SessionKey, SaveError> {
        self.insert_new(session_state, ttl).map_err(SaveError::Other)
    }

    async fn update(
        &self,
        session_key: SessionKey,
        session_state: SessionState,
        ttl: &Duration,
    ) -> Result<SessionKey, UpdateError> {
        {
            let mut sessions = self.sessions.write().map_err(|_| UpdateError::Other(Self::poisoned()))?;
            if let Some(entry) = sessions.get_mut(session_key.as_ref()) {
                *entry = (session_state, Self::expiry(ttl));
                return Ok(session_key);
            }
        }

        // 이미 만료되어 사라진 세션은 새 키로 저장
        self.insert_new(session_state, ttl).map_err(UpdateError::Other)
    }

    async fn update_ttl(&self, session_key: &SessionKey, ttl: &Duration) -> Result<(), anyhow::Error> {
        let mut sessions = self.sessions.write().map_err(|_| Self::poisoned())?;
        if let Some((_, expires_at)) = sessions.get_mut(session_key.as_ref()) {
            *expires_at = Self::expiry(ttl);
        }
        Ok(())
    }

    async fn delete(&self, session_key: &SessionKey) -> Result<(), anyhow::Error> {
        self.sessions
            .write()
            .map_err(|_| Self::poisoned())?
            .remove(session_key.as_ref());
        Ok(())
    }
}
