//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 세션 저장소, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.
//! 모든 값은 환경 변수 조회 함수(`lookup`)를 통해 읽으므로 테스트에서 프로세스
//! 환경을 건드리지 않고 임의의 값을 주입할 수 있습니다.

use log::warn;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `ENVIRONMENT` (없으면 `NODE_ENV`) 값으로 환경을 결정합니다. 기본값은 운영 환경입니다.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("ENVIRONMENT")
            .or_else(|| lookup("NODE_ENV"))
            .unwrap_or_else(|| "production".to_string());
        Self::from_str(&raw)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST`가 4..=15 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost<F>(lookup: &F, env: &Environment) -> u32
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cost) = lookup("BCRYPT_COST").and_then(|s| s.parse::<u32>().ok()) {
            if (4..=15).contains(&cost) {
                return cost;
            }
            warn!("BCRYPT_COST {} 는 허용 범위(4-15)를 벗어났습니다. 환경 기본값 사용", cost);
        }

        Self::bcrypt_cost_for_env(env)
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 및 외부 노출 주소
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// OAuth 콜백 URL 생성에 사용하는 외부 기준 URL (끝의 `/` 제거됨)
    pub public_base_url: String,
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            public_base_url,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 요청 속도 제한 (actix-governor)
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 값이 없거나 0 이하로 파싱되면 기본값(초당 100, 버스트 200)을 사용합니다
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        fn positive<T: std::str::FromStr + PartialOrd + Default>(raw: Option<String>, name: &str, default: T) -> T {
            match raw {
                None => default,
                Some(raw) => match raw.parse::<T>() {
                    Ok(value) if value > T::default() => value,
                    _ => {
                        warn!("{} 값 '{}' 를 사용할 수 없습니다. 기본값 사용", name, raw);
                        default
                    }
                },
            }
        }

        Self {
            per_second: positive(lookup("RATE_LIMIT_PER_SECOND"), "RATE_LIMIT_PER_SECOND", 100),
            burst_size: positive(lookup("RATE_LIMIT_BURST_SIZE"), "RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { per_second: 100, burst_size: 200 }
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            uri: lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            name: lookup("DATABASE_NAME").unwrap_or_else(|| "userDB".to_string()),
        }
    }
}

/// 세션 레코드 저장 위치
#[derive(Debug, Clone, PartialEq)]
pub enum SessionBackend {
    Redis,
    Memory,
}

/// 서버 측 세션 및 세션 쿠키 설정
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub backend: SessionBackend,
    pub redis_url: String,
    /// 세션 쿠키 암호화 키를 만드는 비밀 값
    pub secret: String,
    pub cookie_name: String,
    pub ttl_seconds: u64,
    pub cookie_secure: bool,
}

impl SessionConfig {
    const DEV_SECRET: &'static str = "dev-session-secret-change-me";

    /// 운영 환경에서 `SESSION_SECRET`이 없으면 `None`을 반환합니다.
    pub fn from_lookup<F>(lookup: &F, env: &Environment) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup("SESSION_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if env.is_production() => return None,
            None => {
                warn!("SESSION_SECRET not set, using default (not secure for production!)");
                Self::DEV_SECRET.to_string()
            }
        };

        let backend = match lookup("SESSION_STORE").as_deref() {
            Some("memory") => SessionBackend::Memory,
            _ => SessionBackend::Redis,
        };

        Some(Self {
            backend,
            redis_url: lookup("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
            secret,
            cookie_name: lookup("SESSION_COOKIE_NAME").unwrap_or_else(|| "secrets.sid".to_string()),
            ttl_seconds: lookup("SESSION_TTL_SECONDS")
                .and_then(|s| s.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(86_400),
            cookie_secure: lookup("SESSION_COOKIE_SECURE")
                .map(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    /// 개발/테스트용 기본 세션 설정 (인메모리 저장소)
    pub fn development() -> Self {
        Self {
            backend: SessionBackend::Memory,
            redis_url: "redis://localhost:6379".to_string(),
            secret: Self::DEV_SECRET.to_string(),
            cookie_name: "secrets.sid".to_string(),
            ttl_seconds: 86_400,
            cookie_secure: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_falls_back_to_node_env() {
        let lookup = lookup_from(&[("NODE_ENV", "dev")]);
        assert_eq!(Environment::from_lookup(&lookup), Environment::Development);

        let lookup = lookup_from(&[]);
        assert_eq!(Environment::from_lookup(&lookup), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_bcrypt_cost_override_must_be_in_range() {
        let lookup = lookup_from(&[("BCRYPT_COST", "8")]);
        assert_eq!(PasswordConfig::bcrypt_cost(&lookup, &Environment::Production), 8);

        let lookup = lookup_from(&[("BCRYPT_COST", "31")]);
        assert_eq!(PasswordConfig::bcrypt_cost(&lookup, &Environment::Production), 12);
    }

    #[test]
    fn test_server_config_defaults() {
        let server = ServerConfig::from_lookup(&lookup_from(&[]));

        assert_eq!(server.port, 3000);
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.public_base_url, "http://localhost:3000");
    }

    #[test]
    fn test_public_base_url_trailing_slash_is_trimmed() {
        let server = ServerConfig::from_lookup(&lookup_from(&[(
            "PUBLIC_BASE_URL",
            "https://secrets.example.com/",
        )]));

        assert_eq!(server.public_base_url, "https://secrets.example.com");
    }

    #[test]
    fn test_rate_limit_defaults_and_invalid_values() {
        assert_eq!(RateLimitConfig::from_lookup(&lookup_from(&[])), RateLimitConfig::default());

        let lookup = lookup_from(&[("RATE_LIMIT_PER_SECOND", "20"), ("RATE_LIMIT_BURST_SIZE", "0")]);
        let limits = RateLimitConfig::from_lookup(&lookup);
        assert_eq!(limits.per_second, 20);
        assert_eq!(limits.burst_size, 200);

        let lookup = lookup_from(&[("RATE_LIMIT_PER_SECOND", "fast")]);
        assert_eq!(RateLimitConfig::from_lookup(&lookup).per_second, 100);
    }

    #[test]
    fn test_session_secret_required_in_production() {
        let lookup = lookup_from(&[]);
        assert!(SessionConfig::from_lookup(&lookup, &Environment::Production).is_none());

        let dev = SessionConfig::from_lookup(&lookup, &Environment::Development).unwrap();
        assert_eq!(dev.secret, SessionConfig::DEV_SECRET);
    }

    #[test]
    fn test_session_config_values() {
        let lookup = lookup_from(&[
            ("SESSION_SECRET", "s3cr3t"),
            ("SESSION_STORE", "memory"),
            ("SESSION_TTL_SECONDS", "600"),
            ("SESSION_COOKIE_SECURE", "true"),
        ]);
        let session = SessionConfig::from_lookup(&lookup, &Environment::Production).unwrap();

        assert_eq!(session.secret, "s3cr3t");
        assert_eq!(session.backend, SessionBackend::Memory);
        assert_eq!(session.ttl_seconds, 600);
        assert!(session.cookie_secure);
        assert_eq!(session.cookie_name, "secrets.sid");
    }
}
