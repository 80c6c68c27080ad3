//! 사용자 관리 서비스 모듈
//!
//! 로컬 자격 증명 검증과 사용자별 시크릿 관리를 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 해싱/검증은 블로킹 스레드 풀에서 실행
//! - 원문 비밀번호는 저장하거나 로그에 남기지 않음

pub mod user_service;

pub use user_service::UserService;
