//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 데이터 구조를 정의합니다.
//! 요청 DTO는 HTML 폼(`application/x-www-form-urlencoded`)과 OAuth 콜백 쿼리를
//! 매핑하고, 응답 DTO는 화면 렌더링에 필요한 최소한의 정보만 담습니다.
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/    # 폼/쿼리 요청 (validator 검증 포함)
//!     └── response/   # 화면 표시용 객체 (민감 정보 제외)
//! ```

pub mod users;

pub use users::*;
