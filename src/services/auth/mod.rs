//! 인증 및 세션 서비스 모듈
//!
//! 세션 기반 로그인과 OAuth 2.0 소셜 로그인을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 암호화된 세션 쿠키와 서버 측 세션 레코드 (`actix-session`)
//! - Google / Twitter OAuth 2.0 로그인
//! - OAuth 계정과 사용자 레코드 연결
//!
//! # Security
//!
//! - 세션 쿠키 암호화 (SHA-512로 파생한 64바이트 키)
//! - 로그인 시 세션 토큰 재발급
//! - CSRF 방지 (OAuth state 매개변수)
//! - PKCE S256 (Twitter, `oauth2` 크레이트)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{IdentityFederator, OAuthService};
//!
//! let identity = oauth.complete(provider, session.take_oauth(), &query).await?;
//! let federated = federator.find_or_create(&identity).await?;
//! session.login(federated.user().id_string().unwrap_or_default())?;
//! ```

pub mod session_service;
pub mod federation_service;
pub mod oauth_service;

pub use session_service::{session_key, session_middleware, SessionBackendStore};
pub use federation_service::{Federated, IdentityFederator};
pub use oauth_service::{AuthorizationRequest, OAuthService};
