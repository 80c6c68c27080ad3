//! 사용자 데이터 액세스 계층
//!
//! - [`UserRepository`](user_repo::UserRepository): MongoDB `users` 컬렉션
//! - [`MemoryUserRepository`](memory_user_repo::MemoryUserRepository): 프로세스 내 저장소
//!
//! 사용자명, Google ID, Twitter ID는 각각 유일해야 합니다. 두 구현 모두
//! 삽입 시점에 원자적으로 유일성을 강제하고, 충돌은 에러가 아니라
//! [`InsertOutcome::Duplicate`]로 알려줍니다.

pub mod user_repo;
pub mod memory_user_repo;

use async_trait::async_trait;
use crate::{
    domain::{entities::users::user::User, models::oauth::ProviderIdentity},
    errors::AppResult,
};

/// 유일성 제약이 걸린 사용자 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    GoogleId,
    TwitterId,
}

impl UniqueField {
    pub const ALL: [UniqueField; 3] = [UniqueField::Username, UniqueField::GoogleId, UniqueField::TwitterId];

    pub fn field_name(&self) -> &'static str {
        match self {
            UniqueField::Username => "username",
            UniqueField::GoogleId => "google_id",
            UniqueField::TwitterId => "twitter_id",
        }
    }

    pub fn index_name(&self) -> &'static str {
        match self {
            UniqueField::Username => "username_unique",
            UniqueField::GoogleId => "google_id_unique",
            UniqueField::TwitterId => "twitter_id_unique",
        }
    }

    pub fn for_identity(identity: &ProviderIdentity) -> Self {
        match identity {
            ProviderIdentity::Google(_) => UniqueField::GoogleId,
            ProviderIdentity::Twitter(_) => UniqueField::TwitterId,
        }
    }

    /// 사용자 레코드에서 이 필드의 값
    pub fn value_of<'a>(&self, user: &'a User) -> Option<&'a str> {
        match self {
            UniqueField::Username => user.username.as_deref(),
            UniqueField::GoogleId => user.google_id.as_deref(),
            UniqueField::TwitterId => user.twitter_id.as_deref(),
        }
    }
}

/// 사용자 삽입 결과
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// 저장된 사용자 (`id` 채워짐)
    Created(User),
    /// 이미 같은 값을 가진 사용자가 있음
    Duplicate(UniqueField),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 인덱스 생성 등 저장소 초기화
    async fn init(&self) -> AppResult<()>;

    /// 형식이 잘못된 ID는 `Ok(None)`
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_identity(&self, identity: &ProviderIdentity) -> AppResult<Option<User>>;

    async fn insert(&self, user: User) -> AppResult<InsertOutcome>;

    /// 시크릿을 덮어씁니다. 사용자가 없으면 `Ok(false)`
    async fn set_secret(&self, id: &str, secret: &str) -> AppResult<bool>;

    /// 시크릿이 설정된 사용자 목록 (가입 순)
    async fn find_with_secrets(&self) -> AppResult<Vec<User>>;
}
