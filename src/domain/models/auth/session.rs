//! 로그인 세션 핸들
//!
//! 세션 쿠키, 저장소, 토큰 재발급과 삭제는 `actix-session`이 처리합니다.
//! [`AuthSession`]은 그 위에서 이 서비스가 세션에 두는 두 값만 다룹니다.
//!
//! | 키 | 값 |
//! |----|----|
//! | `user_id` | 로그인한 사용자의 ObjectId (hex) |
//! | `oauth` | 진행 중인 OAuth 로그인 ([`PendingOAuth`]) |
//!
//! 사용자 전체가 아니라 ID만 저장하며, 요청마다 사용자 저장소에서 다시 조회합니다.

use std::future::{ready, Ready};
use actix_session::{Session, SessionExt};
use actix_web::{dev::Payload, Error, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::OAuthProvider;
use crate::errors::{AppError, AppResult};

pub const USER_ID_KEY: &str = "user_id";
pub const OAUTH_KEY: &str = "oauth";

/// 진행 중인 OAuth 로그인 정보
///
/// 리다이렉트 시작 시 저장되고 콜백에서 한 번 꺼내 쓴 뒤 제거됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOAuth {
    pub provider: OAuthProvider,
    /// CSRF 방지용 state 값
    pub state: String,
    /// PKCE code_verifier (PKCE를 쓰는 프로바이더만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_verifier: Option<String>,
}

fn session_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::SessionError(e.to_string())
}

/// 요청 단위 로그인 세션
#[derive(Clone)]
pub struct AuthSession(Session);

impl AuthSession {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    pub fn user_id(&self) -> AppResult<Option<String>> {
        self.0.get::<String>(USER_ID_KEY).map_err(session_error)
    }

    /// 사용자 ID를 기록하고 세션 키를 새로 발급받습니다
    ///
    /// 진행 중이던 OAuth 정보는 버립니다.
    pub fn login(&self, user_id: String) -> AppResult<()> {
        self.0.renew();
        self.0.remove(OAUTH_KEY);
        self.0.insert(USER_ID_KEY, user_id).map_err(session_error)
    }

    /// 세션 레코드를 삭제하고 쿠키를 제거합니다
    pub fn logout(&self) {
        self.0.purge();
    }

    pub fn begin_oauth(&self, pending: PendingOAuth) -> AppResult<()> {
        self.0.insert(OAUTH_KEY, pending).map_err(session_error)
    }

    /// 진행 중인 OAuth 정보를 꺼냅니다 (한 번만 사용 가능)
    ///
    /// 값이 없으면 세션을 건드리지 않습니다.
    pub fn take_oauth(&self) -> Option<PendingOAuth> {
        let pending = match self.0.get::<PendingOAuth>(OAUTH_KEY) {
            Ok(None) => return None,
            Ok(Some(pending)) => Some(pending),
            Err(err) => {
                log::warn!("세션의 OAuth 정보를 읽을 수 없습니다: {}", err);
                None
            }
        };
        self.0.remove(OAUTH_KEY);
        pending
    }
}

impl FromRequest for AuthSession {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(AuthSession(req.get_session())))
    }
}
