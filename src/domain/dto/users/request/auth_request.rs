//! 인증 요청관련 DTO
//!
//! 로컬 가입/로그인 폼과 OAuth 콜백 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::entities::users::user::MAX_PASSWORD_BYTES;

/// 가입/로그인 폼 (`username`, `password`)
///
/// `Debug` 출력에서 비밀번호는 가려집니다.
#[derive(Deserialize, Validate)]
pub struct CredentialsForm {
    #[validate(length(min = 1, max = 64, message = "사용자명은 1-64자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: String,
}

impl std::fmt::Debug for CredentialsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 프로바이더가 거부/에러를 반환하면 `code` 대신 `error`가 채워집니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만으로 이루어질 수 없습니다".into()));
    }
    Ok(())
}

fn validate_password_bytes(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message(format!("비밀번호는 {}바이트 이하여야 합니다", MAX_PASSWORD_BYTES).into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_form_validation() {
        let valid = CredentialsForm { username: "alice".to_string(), password: "pw1".to_string() };
        assert!(valid.validate().is_ok());

        let blank = CredentialsForm { username: "   ".to_string(), password: "pw1".to_string() };
        assert!(blank.validate().is_err());

        let no_password = CredentialsForm { username: "alice".to_string(), password: String::new() };
        assert!(no_password.validate().is_err());
    }

    #[test]
    fn test_password_limit_counts_bytes() {
        let at_limit = CredentialsForm { username: "alice".to_string(), password: "a".repeat(71) };
        assert!(at_limit.validate().is_ok());

        let too_long = CredentialsForm { username: "alice".to_string(), password: format!("{}REAL", "a".repeat(72)) };
        assert!(too_long.validate().is_err());

        // 한글 한 글자는 3바이트
        let multibyte = CredentialsForm { username: "alice".to_string(), password: "가".repeat(24) };
        assert!(multibyte.validate().is_err());
    }

    #[test]
    fn test_debug_output_hides_password() {
        let form = CredentialsForm { username: "alice".to_string(), password: "hunter2".to_string() };
        let debug = format!("{:?}", form);

        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
