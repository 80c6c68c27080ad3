//! 소셜 로그인 핸들러
//!
//! `{provider}`는 `google` 또는 `twitter`입니다.

use actix_web::{get, web, HttpResponse};
use crate::{
    config::OAuthProvider,
    core::AppState,
    domain::{dto::users::request::OAuthCallbackQuery, models::auth::AuthSession},
    errors::{AppError, AppResult},
    handlers::{pages::login_and_redirect, redirect_on_auth_failure, see_other},
};

fn parse_provider(raw: &str) -> AppResult<OAuthProvider> {
    OAuthProvider::from_str(raw).map_err(AppError::NotFound)
}

/// 프로바이더 인증 페이지로 이동
///
/// # Endpoint
/// `GET /auth/{provider}`
#[get("/auth/{provider}")]
pub async fn oauth_start(
    state: web::Data<AppState>,
    session: AuthSession,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let provider = parse_provider(&path)?;

    match state.oauth.authorization_request(provider) {
        Ok(request) => {
            session.begin_oauth(request.pending)?;
            Ok(see_other(&request.url))
        }
        Err(err) => redirect_on_auth_failure(err, "/login"),
    }
}

/// 프로바이더 콜백
///
/// 성공하면 `/secrets`, 실패하면 세션을 끝내고 `/login`으로 이동합니다.
///
/// # Endpoint
/// `GET /auth/{provider}/callback?code={code}&state={state}`
#[get("/auth/{provider}/callback")]
pub async fn oauth_callback(
    state: web::Data<AppState>,
    session: AuthSession,
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
) -> AppResult<HttpResponse> {
    let provider = parse_provider(&path)?;
    let pending = session.take_oauth();

    let result = async {
        let identity = state.oauth.complete(provider, pending, &query).await?;
        state.federator.find_or_create(&identity).await
    }
    .await;

    match result {
        Ok(federated) => {
            if federated.is_created() {
                log::info!("✅ {} 로그인으로 신규 사용자 생성: {}", provider, federated.user().display_name());
            }
            login_and_redirect(&session, federated.user())
        }
        Err(err) => {
            session.logout();
            redirect_on_auth_failure(err, "/login")
        }
    }
}
