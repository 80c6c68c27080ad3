//! # Domain Models Module
//!
//! 영속 엔티티와 구별되는 도메인 모델과 값 객체를 정의합니다.
//!
//! ```text
//! models/
//! ├── auth/    ← 요청 단위 인증 사용자, 세션 레코드 데이터
//! └── oauth/   ← 프로바이더 식별자, 프로바이더 API 응답 모델
//! ```
//!
//! 엔티티(`../entities/`)가 MongoDB 문서를 표현한다면, 이 모듈의 타입들은
//! 요청 처리 중에만 존재하거나 세션 저장소에 직렬화되는 값입니다.

pub mod auth;
pub mod oauth;

pub use auth::*;
pub use oauth::*;
