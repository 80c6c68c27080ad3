//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증(사용자명/비밀번호)과 OAuth 인증(Google, Twitter)을 하나의 레코드 형태로
//! 표현하며, 로그인 경로마다 정확히 하나의 식별 필드로 조회됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::oauth::ProviderIdentity;

/// 비밀번호 최대 길이 (바이트)
///
/// bcrypt는 끝의 NUL 바이트를 포함해 72바이트까지만 사용합니다. 더 긴 비밀번호는
/// 뒷부분이 무시되므로 받지 않습니다.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// 사용자 엔티티
///
/// 값이 없는 선택 필드는 문서에 저장되지 않습니다. 유니크 인덱스가 sparse 이므로
/// 빈 필드끼리는 충돌하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로컬 계정 사용자명 (unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// bcrypt 해시 (로컬 사용자만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Google 계정 ID (unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    /// Twitter 계정 ID (unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    fn empty() -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: None,
            email: None,
            password_hash: None,
            google_id: None,
            twitter_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 로컬 사용자 생성 (사용자명/패스워드)
    pub fn new_local(username: String, password_hash: String) -> Self {
        Self {
            username: Some(username),
            password_hash: Some(password_hash),
            ..Self::empty()
        }
    }

    /// 새 OAuth 사용자 생성
    ///
    /// 프로바이더 식별 필드 하나만 채워진 레코드를 만듭니다.
    pub fn new_federated(identity: &ProviderIdentity) -> Self {
        let mut user = Self::empty();
        match identity {
            ProviderIdentity::Google(id) => user.google_id = Some(id.clone()),
            ProviderIdentity::Twitter(id) => user.twitter_id = Some(id.clone()),
        }
        user
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 프로바이더 식별자와 연결된 사용자인지 확인
    pub fn matches_identity(&self, identity: &ProviderIdentity) -> bool {
        match identity {
            ProviderIdentity::Google(id) => self.google_id.as_deref() == Some(id.as_str()),
            ProviderIdentity::Twitter(id) => self.twitter_id.as_deref() == Some(id.as_str()),
        }
    }

    /// 화면 표시용 이름
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("anonymous")
    }
}
