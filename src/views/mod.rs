//! # Views Module
//!
//! 서버 렌더링 HTML 페이지입니다. 템플릿 엔진 없이 문자열로 조립하며,
//! 사용자 입력은 항상 [`escape_html`]을 거쳐 출력합니다.

use crate::domain::dto::users::response::SecretEntry;
use crate::utils::string_utils::escape_html;

/// 로그인 페이지에 표시할 소셜 로그인 버튼
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialLogins {
    pub google: bool,
    pub twitter: bool,
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
  <div class="container">
{body}
  </div>
</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}

fn credentials_form(action: &str, submit_label: &str) -> String {
    format!(
        r#"    <form action="{action}" method="POST">
      <label for="username">Username</label>
      <input type="text" id="username" name="username" autocomplete="username" required>
      <label for="password">Password</label>
      <input type="password" id="password" name="password" required>
      <button type="submit">{submit_label}</button>
    </form>"#
    )
}

fn social_buttons(social: SocialLogins) -> String {
    let mut buttons = String::new();
    if social.google {
        buttons.push_str("\n    <a class=\"btn btn-google\" href=\"/auth/google\">Sign in with Google</a>");
    }
    if social.twitter {
        buttons.push_str("\n    <a class=\"btn btn-twitter\" href=\"/auth/twitter\">Sign in with Twitter</a>");
    }
    buttons
}

pub fn home_page(logged_in: bool) -> String {
    let actions = if logged_in {
        r#"    <a href="/secrets">See Secrets</a>
    <a href="/logout">Log Out</a>"#
    } else {
        r#"    <a href="/register">Register</a>
    <a href="/login">Login</a>"#
    };

    layout(
        "Secrets",
        &format!(
            "    <h1>Secrets</h1>\n    <p>Don't keep your secrets, share them anonymously!</p>\n{}",
            actions
        ),
    )
}

pub fn register_page(social: SocialLogins) -> String {
    layout(
        "Register",
        &format!(
            "    <h1>Register</h1>\n{}{}",
            credentials_form("/register", "Register"),
            social_buttons(social)
        ),
    )
}

pub fn login_page(social: SocialLogins) -> String {
    layout(
        "Login",
        &format!(
            "    <h1>Login</h1>\n{}{}",
            credentials_form("/login", "Login"),
            social_buttons(social)
        ),
    )
}

/// 시크릿 목록 (작성자 정보는 표시하지 않음)
pub fn secrets_page(entries: &[SecretEntry], logged_in: bool) -> String {
    let items: String = entries
        .iter()
        .map(|entry| format!("      <li class=\"secret-text\">{}</li>\n", escape_html(&entry.secret)))
        .collect();

    let actions = if logged_in {
        r#"    <a href="/submit">Submit a Secret</a>
    <a href="/logout">Log Out</a>"#
    } else {
        r#"    <a href="/login">Login</a>"#
    };

    layout(
        "Secrets",
        &format!(
            "    <h1>You've Discovered My Secret!</h1>\n    <ul>\n{}    </ul>\n{}",
            items, actions
        ),
    )
}

pub fn submit_page() -> String {
    layout(
        "Submit a Secret",
        r#"    <h1>Secrets</h1>
    <p>Don't keep your secrets, share them anonymously!</p>
    <form action="/submit" method="POST">
      <input type="text" name="secret" placeholder="What's your secret?" maxlength="1000" required>
      <button type="submit">Submit</button>
    </form>"#,
    )
}
