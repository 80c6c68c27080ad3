use std::sync::Arc;
use actix_web::web;
use log::{debug, info, warn};
use crate::{
    domain::entities::users::user::{User, MAX_PASSWORD_BYTES},
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::{InsertOutcome, UniqueField, UserStore},
};

pub struct UserService {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 로컬 사용자 가입
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - bcrypt 한도를 넘는 비밀번호
    /// * `AppError::DuplicateUsername` - 이미 사용 중인 사용자명
    /// * `AppError::InternalError` - 해싱 실패
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::ValidationError(format!(
                "비밀번호는 {}바이트 이하여야 합니다", MAX_PASSWORD_BYTES
            )));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::DuplicateUsername(username.to_string()));
        }

        let start_time = std::time::Instant::now();
        let password_hash = Self::hash_password(password.to_string(), self.bcrypt_cost).await?;
        debug!("Password hashing took: {:?}", start_time.elapsed());

        match self.users.insert(User::new_local(username.to_string(), password_hash)).await? {
            InsertOutcome::Created(user) => {
                info!("새 로컬 사용자 등록: {}", username);
                Ok(user)
            }
            // 사전 조회와 삽입 사이에 같은 이름이 먼저 저장된 경우
            InsertOutcome::Duplicate(UniqueField::Username) => {
                Err(AppError::DuplicateUsername(username.to_string()))
            }
            InsertOutcome::Duplicate(field) => Err(AppError::DatabaseError(format!(
                "unexpected duplicate on {}", field.field_name()
            ))),
        }
    }

    /// 사용자명/비밀번호 검증
    ///
    /// 존재하지 않는 사용자, OAuth 전용 사용자, 비밀번호 불일치 모두
    /// `AppError::InvalidCredentials` 하나로 응답합니다.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        // 한도를 넘는 비밀번호로는 가입할 수 없으므로 일치할 수 없음
        if password.len() > MAX_PASSWORD_BYTES {
            debug!("비밀번호 길이 초과: {}", username);
            return Err(AppError::InvalidCredentials);
        }

        let user = self.users
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let Some(password_hash) = user.password_hash.clone() else {
            warn!("비밀번호가 없는 계정으로 로컬 로그인 시도: {}", username);
            return Err(AppError::InvalidCredentials);
        };

        let is_valid = Self::verify_password(password.to_string(), password_hash).await?;
        if !is_valid {
            debug!("비밀번호 불일치: {}", username);
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    /// 현재 사용자의 시크릿을 덮어씁니다
    pub async fn submit_secret(&self, user_id: &str, secret: &str) -> AppResult<()> {
        if !self.users.set_secret(user_id, secret).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }
        info!("시크릿 업데이트: user_id={}", user_id);
        Ok(())
    }

    pub async fn users_with_secrets(&self) -> AppResult<Vec<User>> {
        self.users.find_with_secrets().await
    }

    async fn hash_password(password: String, cost: u32) -> AppResult<String> {
        web::block(move || bcrypt::non_truncating_hash(password, cost))
            .await
            .context("해싱 작업 실행 실패")?
            .context("비밀번호 해싱 실패")
    }

    async fn verify_password(password: String, hash: String) -> AppResult<bool> {
        web::block(move || bcrypt::non_truncating_verify(password, &hash))
            .await
            .context("검증 작업 실행 실패")?
            .context("비밀번호 검증 실패")
    }
}
