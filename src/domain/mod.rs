//! # Domain Module
//!
//! 비즈니스 도메인의 데이터 구조를 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← MongoDB 문서와 매핑되는 엔티티 (User)
//! ├── dto/        ← HTML 폼/쿼리 요청 및 화면용 응답 객체
//! └── models/     ← 인증 세션, OAuth 프로필 등 도메인 모델
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::User;
