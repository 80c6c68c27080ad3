//! # Authentication Configuration Module
//!
//! OAuth 프로바이더(Google, Twitter)의 클라이언트 정보와 엔드포인트 설정을 관리합니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 사용자명/패스워드 (설정 불필요)
//! 2. **Google OAuth 2.0**: Authorization Code 플로우, `profile` 스코프
//! 3. **Twitter OAuth 2.0**: Authorization Code + PKCE(S256) 플로우
//!
//! 클라이언트 ID와 시크릿이 모두 설정된 프로바이더만 활성화됩니다.
//! 비활성 프로바이더로 로그인을 시도하면 `/login`으로 되돌아갑니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//!
//! export TWITTER_CLIENT_ID="your-twitter-client-id"
//! export TWITTER_CLIENT_SECRET="your-twitter-client-secret"
//!
//! # 엔드포인트 재정의 (테스트/프록시용, 선택)
//! export GOOGLE_TOKEN_URI="https://oauth2.googleapis.com/token"
//! ```

use serde::{Deserialize, Serialize};

/// 외부 OAuth 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Twitter,
}

impl OAuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "twitter" => Ok(OAuthProvider::Twitter),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Twitter => "twitter",
        }
    }

    /// 콜백 경로 (`/auth/{provider}/callback`)
    pub fn callback_path(&self) -> String {
        format!("/auth/{}/callback", self.as_str())
    }

    /// Authorization Code 교환 시 PKCE 검증자가 필요한지 여부
    pub fn uses_pkce(&self) -> bool {
        matches!(self, OAuthProvider::Twitter)
    }

    fn env_prefix(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "GOOGLE",
            OAuthProvider::Twitter => "TWITTER",
        }
    }

    fn default_auth_uri(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "https://accounts.google.com/o/oauth2/v2/auth",
            OAuthProvider::Twitter => "https://twitter.com/i/oauth2/authorize",
        }
    }

    fn default_token_uri(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "https://oauth2.googleapis.com/token",
            OAuthProvider::Twitter => "https://api.twitter.com/2/oauth2/token",
        }
    }

    fn default_userinfo_uri(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "https://www.googleapis.com/oauth2/v3/userinfo",
            OAuthProvider::Twitter => "https://api.twitter.com/2/users/me",
        }
    }

    fn default_scope(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "profile",
            OAuthProvider::Twitter => "users.read tweet.read",
        }
    }
}

impl std::fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 단일 OAuth 프로바이더 클라이언트 설정
#[derive(Debug, Clone)]
pub struct OAuthProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
    pub scope: String,
}

impl OAuthProviderConfig {
    /// `{PREFIX}_CLIENT_ID`와 `{PREFIX}_CLIENT_SECRET`이 모두 있을 때만 설정을 만듭니다.
    pub fn from_lookup<F>(provider: OAuthProvider, lookup: &F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = provider.env_prefix();
        let var = |name: &str| {
            lookup(&format!("{}_{}", prefix, name)).filter(|v| !v.trim().is_empty())
        };

        let client_id = var("CLIENT_ID")?;
        let client_secret = var("CLIENT_SECRET")?;

        Some(Self {
            client_id,
            client_secret,
            auth_uri: var("AUTH_URI").unwrap_or_else(|| provider.default_auth_uri().to_string()),
            token_uri: var("TOKEN_URI").unwrap_or_else(|| provider.default_token_uri().to_string()),
            userinfo_uri: var("USERINFO_URI")
                .unwrap_or_else(|| provider.default_userinfo_uri().to_string()),
            scope: var("SCOPE").unwrap_or_else(|| provider.default_scope().to_string()),
        })
    }
}

/// 활성화된 OAuth 프로바이더 목록
#[derive(Debug, Clone, Default)]
pub struct OAuthConfig {
    pub google: Option<OAuthProviderConfig>,
    pub twitter: Option<OAuthProviderConfig>,
}

impl OAuthConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            google: OAuthProviderConfig::from_lookup(OAuthProvider::Google, lookup),
            twitter: OAuthProviderConfig::from_lookup(OAuthProvider::Twitter, lookup),
        }
    }

    pub fn provider(&self, provider: OAuthProvider) -> Option<&OAuthProviderConfig> {
        match provider {
            OAuthProvider::Google => self.google.as_ref(),
            OAuthProvider::Twitter => self.twitter.as_ref(),
        }
    }
}
