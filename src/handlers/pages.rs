//! 홈, 로컬 가입/로그인, 로그아웃 핸들러

use actix_web::{get, post, web, HttpResponse};
use crate::{
    core::AppState,
    domain::{
        dto::users::request::CredentialsForm,
        entities::users::user::User,
        models::auth::{AuthSession, OptionalUser},
    },
    errors::{AppError, AppResult},
    handlers::{html, redirect_on_auth_failure, see_other, validated},
    views::{self, SocialLogins},
};

fn social_logins(state: &AppState) -> SocialLogins {
    SocialLogins {
        google: state.config.oauth.google.is_some(),
        twitter: state.config.oauth.twitter.is_some(),
    }
}

/// 로그인 처리 후 `/secrets`로 이동
pub(crate) fn login_and_redirect(session: &AuthSession, user: &User) -> AppResult<HttpResponse> {
    let user_id = user
        .id_string()
        .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;
    session.login(user_id)?;
    Ok(see_other("/secrets"))
}

/// # Endpoint
/// `GET /`
#[get("/")]
pub async fn home(user: OptionalUser) -> HttpResponse {
    html(views::home_page(user.0.is_some()))
}

/// # Endpoint
/// `GET /register`
#[get("/register")]
pub async fn register_form(state: web::Data<AppState>) -> HttpResponse {
    html(views::register_page(social_logins(&state)))
}

/// 로컬 가입
///
/// 성공하면 바로 로그인 상태가 됩니다. 실패 시 기존 세션을 끝내고 `/register`로 돌아갑니다.
///
/// # Endpoint
/// `POST /register` (`username`, `password`)
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    session: AuthSession,
    form: Result<web::Form<CredentialsForm>, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let result = async {
        let form = validated(form)?;
        state.users.register(&form.username, &form.password).await
    }
    .await;

    match result {
        Ok(user) => login_and_redirect(&session, &user),
        Err(err) => {
            session.logout();
            redirect_on_auth_failure(err, "/register")
        }
    }
}

/// # Endpoint
/// `GET /login`
#[get("/login")]
pub async fn login_form(state: web::Data<AppState>) -> HttpResponse {
    html(views::login_page(social_logins(&state)))
}

/// 로컬 로그인
///
/// 실패 시 기존 세션을 끝내고 `/login`으로 돌아갑니다.
///
/// # Endpoint
/// `POST /login` (`username`, `password`)
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    session: AuthSession,
    form: Result<web::Form<CredentialsForm>, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let result = async {
        let form = validated(form)?;
        log::info!("로컬 로그인 시도 - 사용자: {}", form.username);
        state.users.authenticate(&form.username, &form.password).await
    }
    .await;

    match result {
        Ok(user) => login_and_redirect(&session, &user),
        Err(err) => {
            session.logout();
            redirect_on_auth_failure(err, "/login")
        }
    }
}

/// 세션을 끝냅니다. 사용자 레코드는 그대로 남습니다.
///
/// # Endpoint
/// `GET /logout`
#[get("/logout")]
pub async fn logout(session: AuthSession) -> HttpResponse {
    session.logout();
    see_other("/")
}
