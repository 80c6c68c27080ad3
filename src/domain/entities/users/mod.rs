//! Users Entity Module
//!
//! 로컬 인증과 OAuth 인증을 모두 표현하는 User 엔티티를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//! use crate::domain::models::oauth::ProviderIdentity;
//!
//! // 로컬 사용자 생성
//! let user = User::new_local("alice".to_string(), hashed_password);
//!
//! // OAuth 사용자 생성 (프로바이더 ID만 채워짐)
//! let oauth_user = User::new_federated(&ProviderIdentity::Google("1234".to_string()));
//! ```

pub mod user;
