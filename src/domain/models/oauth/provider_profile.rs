//! 프로바이더 프로필 API 응답 모델
//!
//! 토큰 응답은 `oauth2::basic::BasicTokenResponse`가 처리합니다.
//!
//! - Google UserInfo (v3): `sub` 필드가 계정 ID
//! - Twitter `/2/users/me`: `data.id` 필드가 계정 ID
//!
//! 알 수 없는 필드는 무시합니다.

use serde::Deserialize;

/// Google OpenID Connect UserInfo 응답
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 고유 ID
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TwitterUserResponse {
    pub data: TwitterUserData,
}

#[derive(Debug, Deserialize)]
pub struct TwitterUserData {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
}
