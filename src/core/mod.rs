//! # Core Module
//!
//! 애플리케이션 조립을 담당합니다.
//!
//! 설정([`AppConfig`](crate::config::AppConfig))을 시작 시 한 번 읽고, 저장소와
//! 서비스를 생성자 주입으로 묶어 [`AppState`] 하나로 만듭니다. 전역 싱글톤은
//! 두지 않으며, `AppState`는 `web::Data`로 감싸져 라우터와 미들웨어에 전달됩니다.
//!
//! ```text
//! AppConfig ──► AppState::initialize
//!                 ├─ Database ──► UserRepository ─┐
//!                 ├─ RedisSessionStore | MemorySessionStore ──► SessionBackendStore
//!                 ├─ SESSION_SECRET ──► session_key (cookie Key)
//!                 └─ UserService / IdentityFederator / OAuthService
//!                                      │
//!                   routes::configure_app(web::Data<AppState>)
//! ```

pub mod state;

pub use state::AppState;
