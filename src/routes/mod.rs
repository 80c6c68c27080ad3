//! # Routes Module
//!
//! 애플리케이션 라우트 구성을 담당합니다.
//!
//! ## Available Routes
//!
//! | Method | Path | 인증 | 설명 |
//! |--------|------|------|------|
//! | GET | `/health` | - | 헬스체크 (세션 미적용) |
//! | GET | `/` | - | 홈 |
//! | GET/POST | `/register` | - | 로컬 가입 |
//! | GET/POST | `/login` | - | 로컬 로그인 |
//! | GET | `/logout` | - | 로그아웃 |
//! | GET | `/auth/{provider}` | - | 소셜 로그인 시작 (`google`, `twitter`) |
//! | GET | `/auth/{provider}/callback` | - | 소셜 로그인 콜백 |
//! | GET | `/secrets` | - | 시크릿 목록 |
//! | GET/POST | `/submit` | 필수 | 시크릿 제출 |

use actix_session::{storage::SessionStore, SessionMiddleware};
use actix_web::web;
use serde_json::json;
use crate::core::AppState;
use crate::handlers;
use crate::middlewares::CurrentUserMiddleware;
use crate::services::auth::{session_middleware, SessionBackendStore};

#[cfg(test)]
mod tests;

/// 모든 라우트를 설정하는 함수를 만듭니다
///
/// `/health`를 제외한 모든 라우트는 세션 미들웨어 안에 등록됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App, HttpServer};
///
/// let state = web::Data::new(AppState::initialize(config).await?);
/// HttpServer::new(move || App::new().configure(configure_app(state.clone())));
/// ```
pub fn configure_app(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state.clone());

        // Health check endpoint
        cfg.service(health_check);

        let current_user = CurrentUserMiddleware::new(state.users.clone());
        let key = state.session_key.clone();
        let session_config = &state.config.session;

        match &state.session_store {
            SessionBackendStore::Redis(store) => register_session_routes(
                cfg,
                session_middleware(store.clone(), key, session_config),
                current_user,
            ),
            SessionBackendStore::Memory(store) => register_session_routes(
                cfg,
                session_middleware(store.clone(), key, session_config),
                current_user,
            ),
        }
    }
}

fn register_session_routes<S>(
    cfg: &mut web::ServiceConfig,
    sessions: SessionMiddleware<S>,
    current_user: CurrentUserMiddleware,
) where
    S: SessionStore + 'static,
{
    cfg.service(
        web::scope("")
            .wrap(current_user)
            .wrap(sessions)
            // 로컬 인증
            .service(handlers::pages::home)
            .service(handlers::pages::register_form)
            .service(handlers::pages::register)
            .service(handlers::pages::login_form)
            .service(handlers::pages::login)
            .service(handlers::pages::logout)
            // OAuth
            .service(handlers::oauth::oauth_start)
            .service(handlers::oauth::oauth_callback)
            // 시크릿
            .service(handlers::secrets::secrets)
            .service(handlers::secrets::submit_form)
            .service(handlers::secrets::submit_secret),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "secrets_auth_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "sessions": state.session_store.name(),
            "google_oauth": state.config.oauth.google.is_some(),
            "twitter_oauth": state.config.oauth.twitter.is_some()
        }
    }))
}
