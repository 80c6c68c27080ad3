//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 폼/쿼리 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: 폼 필드 존재 여부와 타입 일치성 (`web::Form`, `web::Query`)
//! 2. **형식 검증**: 길이, 공백 여부 등 기본 규칙 (`validator`)
//! 3. **비즈니스 검증**: 사용자명 중복 등은 서비스 계층에서 처리
//!
//! 검증 실패는 `AppError::ValidationError`로 변환되며, 핸들러는 이를 폼으로의
//! 리다이렉트로 처리합니다.

pub mod auth_request;
pub mod secret_request;

pub use auth_request::{CredentialsForm, OAuthCallbackQuery};
pub use secret_request::SubmitSecretForm;
