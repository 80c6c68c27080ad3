//! 애플리케이션 설정 객체
//!
//! 시작 시 한 번 생성되어 [`AppState`](crate::core::AppState)에 담긴 뒤
//! 라우터 팩토리로 전달됩니다. 요청 처리 중에는 환경 변수를 다시 읽지 않습니다.

use std::env;
use crate::errors::AppError;
use super::{
    DatabaseConfig, Environment, OAuthConfig, OAuthProvider, PasswordConfig, RateLimitConfig, ServerConfig,
    SessionConfig,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub oauth: OAuthConfig,
    pub rate_limit: RateLimitConfig,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 로드합니다
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 로드합니다
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 운영 환경에서 `SESSION_SECRET`이 없는 경우
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);

        let session = SessionConfig::from_lookup(&lookup, &environment).ok_or_else(|| {
            AppError::InternalError("SESSION_SECRET must be set in production".to_string())
        })?;

        Ok(Self {
            server: ServerConfig::from_lookup(&lookup),
            database: DatabaseConfig::from_lookup(&lookup),
            session,
            oauth: OAuthConfig::from_lookup(&lookup),
            rate_limit: RateLimitConfig::from_lookup(&lookup),
            bcrypt_cost: PasswordConfig::bcrypt_cost(&lookup, &environment),
            environment,
        })
    }

    /// 개발/테스트용 설정: 인메모리 세션, 최소 bcrypt cost, OAuth 비활성
    pub fn development() -> Self {
        let environment = Environment::Development;

        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                public_base_url: "http://localhost:3000".to_string(),
            },
            database: DatabaseConfig {
                uri: "mongodb://localhost:27017".to_string(),
                name: "userDB".to_string(),
            },
            session: SessionConfig::development(),
            oauth: OAuthConfig::default(),
            rate_limit: RateLimitConfig::default(),
            bcrypt_cost: PasswordConfig::bcrypt_cost_for_env(&environment),
            environment,
        }
    }

    /// 프로바이더별 콜백 URL (`{PUBLIC_BASE_URL}/auth/{provider}/callback`)
    pub fn callback_url(&self, provider: OAuthProvider) -> String {
        format!("{}{}", self.server.public_base_url, provider.callback_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_production_requires_session_secret() {
        let result = AppConfig::from_lookup(|_| None);

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_full_configuration() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("ENVIRONMENT", "staging"),
            ("SESSION_SECRET", "signing-key"),
            ("PUBLIC_BASE_URL", "https://secrets.example.com"),
            ("DATABASE_NAME", "secrets"),
            ("TWITTER_CLIENT_ID", "tid"),
            ("TWITTER_CLIENT_SECRET", "tsecret"),
        ]);

        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.database.name, "secrets");
        assert!(config.oauth.provider(OAuthProvider::Twitter).is_some());
        assert!(config.oauth.provider(OAuthProvider::Google).is_none());
        assert_eq!(
            config.callback_url(OAuthProvider::Twitter),
            "https://secrets.example.com/auth/twitter/callback"
        );
    }
}
