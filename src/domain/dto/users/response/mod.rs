//! 화면 표시용 응답 DTO
//!
//! 엔티티를 그대로 노출하지 않고 렌더링에 필요한 값만 추려냅니다.

use crate::domain::entities::users::user::User;

/// `/secrets` 목록의 한 항목
#[derive(Debug, Clone, PartialEq)]
pub struct SecretEntry {
    pub secret: String,
}

impl SecretEntry {
    /// 시크릿이 없는 사용자는 `None`
    pub fn from_user(user: &User) -> Option<Self> {
        user.secret.as_ref().map(|secret| Self { secret: secret.clone() })
    }
}
