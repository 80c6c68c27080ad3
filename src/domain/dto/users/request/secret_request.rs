//! 시크릿 제출 폼 DTO
use serde::Deserialize;
use validator::Validate;
use super::auth_request::validate_not_blank;

/// `/submit` 폼 (`secret`)
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitSecretForm {
    #[validate(length(min = 1, max = 1000, message = "시크릿은 1-1000자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub secret: String,
}
