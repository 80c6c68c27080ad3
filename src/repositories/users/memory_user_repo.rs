//! 인메모리 사용자 저장소
//!
//! 단일 락 안에서 유일성 검사와 삽입을 함께 수행합니다.

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::{
    domain::{entities::users::user::User, models::oauth::ProviderIdentity},
    errors::{AppError, AppResult},
};
use super::{InsertOutcome, UniqueField, UserStore};

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))
    }

    fn find_where<P>(&self, predicate: P) -> AppResult<Option<User>>
    where
        P: Fn(&User) -> bool,
    {
        Ok(self.read()?.iter().find(|u| predicate(u)).cloned())
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn init(&self) -> AppResult<()> {
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        self.find_where(|u| u.id == Some(object_id))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_where(|u| u.username.as_deref() == Some(username))
    }

    async fn find_by_identity(&self, identity: &ProviderIdentity) -> AppResult<Option<User>> {
        self.find_where(|u| u.matches_identity(identity))
    }

    async fn insert(&self, mut user: User) -> AppResult<InsertOutcome> {
        let mut users = self.write()?;

        for field in UniqueField::ALL {
            let Some(value) = field.value_of(&user) else { continue };
            if users.iter().any(|existing| field.value_of(existing) == Some(value)) {
                return Ok(InsertOutcome::Duplicate(field));
            }
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(InsertOutcome::Created(user))
    }

    async fn set_secret(&self, id: &str, secret: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let mut users = self.write()?;
        match users.iter_mut().find(|u| u.id == Some(object_id)) {
            Some(user) => {
                user.secret = Some(secret.to_string());
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_with_secrets(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?
            .iter()
            .filter(|u| u.secret.is_some())
            .cloned()
            .collect())
    }
}
