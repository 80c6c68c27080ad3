//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - HTML 이스케이프 등 문자열 처리
//! - [`display_terminal`] - 시작 과정 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::escape_html;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let safe = escape_html("<script>");
//! print_boxed_title("Secrets Auth Service");
//! ```

pub mod string_utils;
pub mod display_terminal;
