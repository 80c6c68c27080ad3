//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson`을 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑, 세션 참조값으로 사용
//! - **선택 필드 생략**: 값이 없는 필드는 문서에 기록하지 않음 (sparse 인덱스 전제)

pub mod users;

pub use users::user::User;
