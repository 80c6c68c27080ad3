//! 인증 관련 도메인 모델

pub mod authenticated_user;
pub mod session;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use session::{AuthSession, PendingOAuth};
