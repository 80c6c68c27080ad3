//! MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 sparse unique 인덱스 세 개를 둡니다. 유일성 검사는
//! 조회 후 삽입이 아니라 인덱스에 맡기므로 동시 가입에서도 중복 레코드가
//! 생기지 않습니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::{entities::users::user::User, models::oauth::ProviderIdentity},
    errors::{AppError, AppResult},
};
use super::{InsertOutcome, UniqueField, UserStore};

const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(Self::COLLECTION),
        }
    }

    /// 중복 키 에러라면 충돌한 필드를 돌려줍니다
    fn duplicate_field(err: &MongoError, user: &User) -> Option<UniqueField> {
        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
                duplicate_field_of(write_error.code, &write_error.message, user)
            }
            _ => None,
        }
    }
}

/// 쓰기 에러 코드와 메시지로 충돌한 필드를 판별합니다
///
/// 메시지의 인덱스 이름으로 필드를 찾고, 찾을 수 없으면 삽입하려던 사용자의
/// 식별 필드로 간주합니다.
fn duplicate_field_of(code: i32, message: &str, user: &User) -> Option<UniqueField> {
    if code != DUPLICATE_KEY_CODE {
        return None;
    }

    UniqueField::ALL
        .into_iter()
        .find(|field| message.contains(field.index_name()))
        .or_else(|| {
            UniqueField::ALL
                .into_iter()
                .find(|field| field.value_of(user).is_some())
        })
}

fn db_error(e: MongoError) -> AppError {
    AppError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserStore for UserRepository {
    async fn init(&self) -> AppResult<()> {
        let indexes = UniqueField::ALL.map(|field| {
            IndexModel::builder()
                .keys(doc! { field.field_name(): 1 })
                .options(IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name(field.index_name().to_string())
                    .build())
                .build()
        });

        self.collection
            .create_indexes(indexes)
            .await
            .map_err(db_error)?;

        info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            debug!("유효하지 않은 사용자 ID 형식: {}", id);
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(db_error)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(db_error)
    }

    async fn find_by_identity(&self, identity: &ProviderIdentity) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { identity.field(): identity.value() })
            .await
            .map_err(db_error)
    }

    async fn insert(&self, mut user: User) -> AppResult<InsertOutcome> {
        match self.collection.insert_one(&user).await {
            Ok(result) => {
                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::DatabaseError("삽입된 문서의 _id가 ObjectId가 아닙니다".to_string())
                })?;
                user.id = Some(id);
                Ok(InsertOutcome::Created(user))
            }
            Err(e) => match Self::duplicate_field(&e, &user) {
                Some(field) => Ok(InsertOutcome::Duplicate(field)),
                None => Err(db_error(e)),
            },
        }
    }

    async fn set_secret(&self, id: &str, secret: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "secret": secret, "updated_at": DateTime::now() } },
            )
            .await
            .map_err(db_error)?;

        Ok(result.matched_count > 0)
    }

    async fn find_with_secrets(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection
            .find(doc! { "secret": { "$ne": null } })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(db_error)?;

        cursor.try_collect().await.map_err(db_error)
    }
}
