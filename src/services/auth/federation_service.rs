//! OAuth 계정과 사용자 레코드 연결
//!
//! 프로바이더 계정 ID 하나당 사용자 레코드는 정확히 하나입니다. 같은 계정으로
//! 동시에 첫 로그인이 들어오면 먼저 저장한 쪽이 이기고, 나머지는 유니크
//! 제약 충돌을 받은 뒤 저장된 레코드를 다시 조회해서 사용합니다.

use std::sync::Arc;
use log::{info, warn};
use crate::{
    domain::{entities::users::user::User, models::oauth::ProviderIdentity},
    errors::{AppError, AppResult},
    repositories::users::{InsertOutcome, UserStore},
};

/// find-or-create 결과
#[derive(Debug, Clone)]
pub enum Federated {
    Existing(User),
    Created(User),
}

impl Federated {
    pub fn user(&self) -> &User {
        match self {
            Federated::Existing(user) | Federated::Created(user) => user,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Federated::Created(_))
    }
}

pub struct IdentityFederator {
    users: Arc<dyn UserStore>,
}

impl IdentityFederator {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 프로바이더 계정에 연결된 사용자를 찾고, 없으면 만듭니다
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 저장소 실패, 또는 충돌 후 재조회에서도 찾지 못한 경우
    pub async fn find_or_create(&self, identity: &ProviderIdentity) -> AppResult<Federated> {
        if let Some(user) = self.users.find_by_identity(identity).await? {
            info!("{} 사용자 로그인: {}", identity.provider(), identity.value());
            return Ok(Federated::Existing(user));
        }

        match self.users.insert(User::new_federated(identity)).await? {
            InsertOutcome::Created(user) => {
                info!("새 {} 사용자 등록: {}", identity.provider(), identity.value());
                Ok(Federated::Created(user))
            }
            InsertOutcome::Duplicate(field) => {
                warn!("동시 생성 충돌 ({}), 기존 레코드 재조회: {}", field.field_name(), identity);
                self.users
                    .find_by_identity(identity)
                    .await?
                    .map(Federated::Existing)
                    .ok_or_else(|| AppError::DatabaseError(format!(
                        "{} 충돌 후 사용자를 찾을 수 없습니다", identity
                    )))
            }
        }
    }
}
