//! 시크릿 목록/제출 핸들러

use actix_web::{get, post, web, HttpResponse};
use crate::{
    core::AppState,
    domain::{
        dto::users::{request::SubmitSecretForm, response::SecretEntry},
        models::auth::{AuthenticatedUser, OptionalUser},
    },
    errors::AppResult,
    handlers::{html, redirect_on_auth_failure, see_other, validated},
    middlewares::AuthMiddleware,
    views,
};

/// 시크릿이 있는 모든 사용자의 시크릿 목록 (로그인 불필요)
///
/// # Endpoint
/// `GET /secrets`
#[get("/secrets")]
pub async fn secrets(state: web::Data<AppState>, user: OptionalUser) -> AppResult<HttpResponse> {
    let entries: Vec<SecretEntry> = state.users
        .users_with_secrets()
        .await?
        .iter()
        .filter_map(SecretEntry::from_user)
        .collect();

    Ok(html(views::secrets_page(&entries, user.0.is_some())))
}

/// # Endpoint
/// `GET /submit` (로그인 필요)
#[get("/submit", wrap = "AuthMiddleware::required()")]
pub async fn submit_form() -> HttpResponse {
    html(views::submit_page())
}

/// 현재 사용자의 시크릿을 저장합니다 (이전 값은 덮어씀)
///
/// # Endpoint
/// `POST /submit` (`secret`, 로그인 필요)
#[post("/submit", wrap = "AuthMiddleware::required()")]
pub async fn submit_secret(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    form: Result<web::Form<SubmitSecretForm>, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let form = match validated(form) {
        Ok(form) => form,
        Err(err) => return redirect_on_auth_failure(err, "/submit"),
    };

    state.users.submit_secret(&user.user_id, &form.secret).await?;
    Ok(see_other("/secrets"))
}
