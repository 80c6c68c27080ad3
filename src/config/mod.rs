//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 시작 시점에 [`AppConfig`] 하나로 모아
//! 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경, 서버, 데이터베이스, 세션, 비밀번호 해싱 설정
//! - [`auth_config`] - OAuth 프로바이더 설정
//! - [`app_config`] - 위 설정들을 묶은 애플리케이션 설정 객체
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! export SESSION_SECRET="your-session-signing-secret"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export REDIS_URL="redis://localhost:6379"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"          # development, test, staging, production
//! export PUBLIC_BASE_URL="https://secrets.example.com"
//! export SESSION_STORE="redis"             # redis, memory
//! export SESSION_TTL_SECONDS="86400"
//! export BCRYPT_COST="12"                  # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;
pub mod app_config;

pub use data_config::*;
pub use auth_config::*;
pub use app_config::AppConfig;
