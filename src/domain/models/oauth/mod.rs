//! # OAuth Domain Models Module
//!
//! 외부 OAuth 프로바이더와 주고받는 모델들을 정의합니다.
//!
//! ```text
//! oauth/
//! ├── provider_identity.rs   ← 프로바이더가 확인해 준 사용자 식별자
//! └── provider_profile.rs    ← 프로필 API 응답 역직렬화 모델
//! ```
//!
//! 프로필 응답 중 사용하는 값은 프로바이더 계정 ID 하나뿐입니다.
//! 이메일, 이름 등은 요청하지도 저장하지도 않습니다.

pub mod provider_identity;
pub mod provider_profile;

pub use provider_identity::ProviderIdentity;
pub use provider_profile::{GoogleUserInfo, TwitterUserData, TwitterUserResponse};
