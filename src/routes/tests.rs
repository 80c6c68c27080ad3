use actix_web::{
    cookie::Cookie,
    dev::ServiceResponse,
    http::{header, StatusCode},
    test, web, App,
};
use oauth2::url::Url;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};
use crate::config::{AppConfig, OAuthConfig, OAuthProviderConfig};
use crate::core::AppState;
use super::configure_app;

const COOKIE_NAME: &str = "secrets.sid";

fn state_with(config: AppConfig) -> web::Data<AppState> {
    web::Data::new(AppState::in_memory(config).unwrap())
}

macro_rules! init_app {
    ($config:expr) => {
        test::init_service(App::new().configure(configure_app(state_with($config)))).await
    };
}

macro_rules! send {
    ($app:expr, $req:expr) => {
        test::call_service(&$app, $req.to_request()).await
    };
}

/// 가입 후 세션 쿠키를 돌려줍니다
macro_rules! register {
    ($app:expr, $username:expr, $password:expr) => {{
        let res = send!($app, form_req("/register", &[("username", $username), ("password", $password)], None));
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/secrets");
        session_cookie(&res).expect("registration must start a session")
    }};
}

fn get_req(uri: &str, cookie: Option<&Cookie<'static>>) -> test::TestRequest {
    let req = test::TestRequest::get().uri(uri);
    match cookie {
        Some(cookie) => req.cookie(cookie.clone()),
        None => req,
    }
}

fn form_req(uri: &str, form: &[(&str, &str)], cookie: Option<&Cookie<'static>>) -> test::TestRequest {
    let req = test::TestRequest::post().uri(uri).set_form(form);
    match cookie {
        Some(cookie) => req.cookie(cookie.clone()),
        None => req,
    }
}

fn location(res: &ServiceResponse) -> String {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn session_cookie(res: &ServiceResponse) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|c| c.name() == COOKIE_NAME)
        .map(|c| c.into_owned())
}

/// 응답이 유효한 세션 쿠키를 발급했는지 (삭제용 빈 쿠키 제외)
fn has_live_session(res: &ServiceResponse) -> bool {
    session_cookie(res).is_some_and(|c| !c.value().is_empty())
}

fn query_param(url: &str, key: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

async fn body_text(res: ServiceResponse) -> String {
    String::from_utf8(test::read_body(res).await.to_vec()).unwrap()
}

#[actix_web::test]
async fn test_register_submit_and_list_secret() {
    let app = init_app!(AppConfig::development());

    let cookie = register!(app, "alice", "pw1");

    let res = send!(app, form_req("/login", &[("username", "alice"), ("password", "pw1")], None));
    assert_eq!(location(&res), "/secrets");
    let cookie_after_login = session_cookie(&res).unwrap();
    assert_ne!(cookie_after_login.value(), cookie.value());

    let res = send!(app, get_req("/submit", Some(&cookie_after_login)));
    assert_eq!(res.status(), StatusCode::OK);

    let res = send!(app, form_req("/submit", &[("secret", "hello")], Some(&cookie_after_login)));
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/secrets");

    let res = send!(app, get_req("/secrets", None));
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("hello"));
}

#[actix_web::test]
async fn test_anonymous_submit_redirects_to_login() {
    let app = init_app!(AppConfig::development());

    let res = send!(app, get_req("/submit", None));
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
    assert!(!has_live_session(&res));

    let res = send!(app, form_req("/submit", &[("secret", "sneaky")], None));
    assert_eq!(location(&res), "/login");

    let res = send!(app, get_req("/secrets", None));
    assert!(!body_text(res).await.contains("sneaky"));
}

#[actix_web::test]
async fn test_duplicate_registration_keeps_first_password() {
    let app = init_app!(AppConfig::development());
    register!(app, "alice", "pw1");

    let res = send!(app, form_req("/register", &[("username", "alice"), ("password", "pw2")], None));
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/register");
    assert!(!has_live_session(&res));

    let res = send!(app, form_req("/login", &[("username", "alice"), ("password", "pw2")], None));
    assert_eq!(location(&res), "/login");
    assert!(!has_live_session(&res));

    let res = send!(app, form_req("/login", &[("username", "alice"), ("password", "pw1")], None));
    assert_eq!(location(&res), "/secrets");
}

#[actix_web::test]
async fn test_invalid_forms_redirect_back() {
    let app = init_app!(AppConfig::development());

    let res = send!(app, form_req("/register", &[("username", ""), ("password", "pw1")], None));
    assert_eq!(location(&res), "/register");

    let res = send!(app, form_req("/login", &[("username", "alice")], None));
    assert_eq!(location(&res), "/login");

    let cookie = register!(app, "alice", "pw1");
    let res = send!(app, form_req("/submit", &[("secret", "   ")], Some(&cookie)));
    assert_eq!(location(&res), "/submit");
}

#[actix_web::test]
async fn test_failed_login_or_register_ends_existing_session() {
    let app = init_app!(AppConfig::development());

    let alice = register!(app, "alice", "pw1");
    let res = send!(app, form_req("/login", &[("username", "alice"), ("password", "wrong")], Some(&alice)));
    assert_eq!(location(&res), "/login");
    assert!(!has_live_session(&res));
    let res = send!(app, get_req("/submit", Some(&alice)));
    assert_eq!(location(&res), "/login");

    let bob = register!(app, "bob", "pw2");
    let res = send!(app, form_req("/register", &[("username", "alice"), ("password", "pw3")], Some(&bob)));
    assert_eq!(location(&res), "/register");
    let res = send!(app, get_req("/submit", Some(&bob)));
    assert_eq!(location(&res), "/login");
}

#[actix_web::test]
async fn test_overlong_password_is_rejected() {
    let app = init_app!(AppConfig::development());
    let prefix = "a".repeat(72);

    let res = send!(app, form_req("/register", &[("username", "alice"), ("password", &format!("{}REAL", prefix))], None));
    assert_eq!(location(&res), "/register");
    assert!(!has_live_session(&res));

    let res = send!(app, form_req("/login", &[("username", "alice"), ("password", &format!("{}WRONG", prefix))], None));
    assert_eq!(location(&res), "/login");
    assert!(!has_live_session(&res));
}

#[actix_web::test]
async fn test_logout_ends_session() {
    let app = init_app!(AppConfig::development());
    let cookie = register!(app, "alice", "pw1");

    let res = send!(app, get_req("/logout", Some(&cookie)));
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");
    assert_eq!(session_cookie(&res).unwrap().value(), "");

    // 이전 쿠키로는 더 이상 인증되지 않음
    let res = send!(app, get_req("/submit", Some(&cookie)));
    assert_eq!(location(&res), "/login");

    // 사용자 레코드는 남아 있음
    let res = send!(app, form_req("/login", &[("username", "alice"), ("password", "pw1")], None));
    assert_eq!(location(&res), "/secrets");
}

#[actix_web::test]
async fn test_tampered_cookie_is_anonymous() {
    let app = init_app!(AppConfig::development());
    let cookie = register!(app, "alice", "pw1");

    let reversed: String = cookie.value().chars().rev().collect();
    let forged = Cookie::new(COOKIE_NAME, reversed);

    let res = send!(app, get_req("/submit", Some(&forged)));
    assert_eq!(location(&res), "/login");
}

#[actix_web::test]
async fn test_secrets_lists_only_users_with_secret() {
    let app = init_app!(AppConfig::development());
    let alice = register!(app, "alice", "pw1");
    let bob = register!(app, "bob", "pw2");

    send!(app, form_req("/submit", &[("secret", "alice-secret")], Some(&alice)));
    send!(app, form_req("/submit", &[("secret", "<b>bold</b>")], Some(&bob)));
    send!(app, form_req("/submit", &[("secret", "alice-updated")], Some(&alice)));

    let body = body_text(send!(app, get_req("/secrets", Some(&alice)))).await;
    assert!(body.contains("alice-updated"));
    assert!(!body.contains("alice-secret"));
    assert!(body.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert_eq!(body.matches("class=\"secret-text\"").count(), 2);
}

#[actix_web::test]
async fn test_anonymous_pages_do_not_create_sessions() {
    let app = init_app!(AppConfig::development());

    for uri in ["/", "/register", "/login", "/secrets"] {
        let res = send!(app, get_req(uri, None));
        assert_eq!(res.status(), StatusCode::OK, "{}", uri);
        assert!(session_cookie(&res).is_none(), "{}", uri);
    }
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!(AppConfig::development());

    let res = send!(app, get_req("/health", None));
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["features"]["sessions"], "Memory");
}

#[actix_web::test]
async fn test_unconfigured_or_unknown_provider() {
    let app = init_app!(AppConfig::development());

    let res = send!(app, get_req("/auth/twitter", None));
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");

    let res = send!(app, get_req("/auth/github", None));
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

fn google_config(server: &MockServer) -> AppConfig {
    let mut config = AppConfig::development();
    config.oauth = OAuthConfig {
        google: Some(OAuthProviderConfig {
            client_id: "google-client".to_string(),
            client_secret: "google-secret".to_string(),
            auth_uri: format!("{}/authorize", server.uri()),
            token_uri: format!("{}/token", server.uri()),
            userinfo_uri: format!("{}/userinfo", server.uri()),
            scope: "profile".to_string(),
        }),
        twitter: None,
    };
    config
}

/// `/auth/google` → 콜백까지 진행하고 콜백 응답을 돌려줍니다
macro_rules! google_login {
    ($app:expr, $server:expr) => {{
        let res = send!($app, get_req("/auth/google", None));
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        let redirect = location(&res);
        assert!(redirect.starts_with(&format!("{}/authorize?", $server.uri())));

        let pending_cookie = session_cookie(&res).expect("pending OAuth must be stored in session");
        let state = query_param(&redirect, "state").unwrap();

        send!(
            $app,
            get_req(
                &format!("/auth/google/callback?code=auth-code&state={}", state),
                Some(&pending_cookie),
            )
        )
    }};
}

#[actix_web::test]
async fn test_google_login_creates_one_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "google-access",
            "token_type": "Bearer"
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "sub": "g-100" })))
        .expect(2)
        .mount(&server)
        .await;

    let app = init_app!(google_config(&server));

    let res = google_login!(app, server);
    assert_eq!(location(&res), "/secrets");
    let first = session_cookie(&res).unwrap();
    send!(app, form_req("/submit", &[("secret", "first")], Some(&first)));

    let res = google_login!(app, server);
    assert_eq!(location(&res), "/secrets");
    let second = session_cookie(&res).unwrap();
    send!(app, form_req("/submit", &[("secret", "second")], Some(&second)));

    // 같은 레코드의 시크릿이 덮어써졌다면 목록에는 하나만 남음
    let body = body_text(send!(app, get_req("/secrets", None))).await;
    assert!(body.contains("second"));
    assert!(!body.contains("first"));
}

#[actix_web::test]
async fn test_oauth_state_mismatch_redirects_to_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = init_app!(google_config(&server));

    let res = send!(app, get_req("/auth/google", None));
    let pending_cookie = session_cookie(&res).unwrap();

    let res = send!(
        app,
        get_req("/auth/google/callback?code=auth-code&state=forged", Some(&pending_cookie))
    );
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");

    let res = send!(app, get_req("/submit", Some(&pending_cookie)));
    assert_eq!(location(&res), "/login");
}

#[actix_web::test]
async fn test_provider_denial_redirects_to_login() {
    let server = MockServer::start().await;
    let app = init_app!(google_config(&server));

    let res = send!(app, get_req("/auth/google", None));
    let pending_cookie = session_cookie(&res).unwrap();

    let res = send!(app, get_req("/auth/google/callback?error=access_denied", Some(&pending_cookie)));
    assert_eq!(location(&res), "/login");
}
