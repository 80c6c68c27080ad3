//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (HTML 폼, 리다이렉트)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - 세션 복원, 로그인 가드
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 폼 검증, 세션 조작, 페이지/리다이렉트
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 응답 규칙
//!
//! - 성공한 POST와 로그인/로그아웃은 `303 See Other`로 다음 페이지를 안내합니다.
//! - 인증 흐름의 실패(중복 사용자명, 잘못된 자격 증명, OAuth 실패, 폼 검증 실패)는
//!   해당 폼으로의 303 리다이렉트가 됩니다.
//! - 저장소 장애 등 나머지 [`AppError`]는 그대로 반환되어 JSON 에러 응답이 됩니다.
//!
//! ## 모듈 구성
//!
//! - [`pages`] - 홈, 가입, 로그인, 로그아웃
//! - [`oauth`] - 소셜 로그인 시작/콜백
//! - [`secrets`] - 시크릿 목록, 제출

pub mod pages;
pub mod oauth;
pub mod secrets;

use actix_web::{http::header, web, HttpResponse};
use actix_web::http::header::ContentType;
use validator::Validate;
use crate::errors::{AppError, AppResult};

/// `303 See Other` 리다이렉트
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// 인증 흐름의 실패는 `location`으로 되돌려 보내고, 나머지는 에러로 전파합니다
pub(crate) fn redirect_on_auth_failure(err: AppError, location: &str) -> AppResult<HttpResponse> {
    if err.is_auth_flow_failure() {
        log::warn!("인증 흐름 실패, {}(으)로 이동: {}", location, err);
        Ok(see_other(location))
    } else {
        log::error!("요청 처리 실패: {}", err);
        Err(err)
    }
}

/// 폼 역직렬화와 `validator` 검증을 함께 수행합니다
pub(crate) fn validated<T: Validate>(
    form: Result<web::Form<T>, actix_web::Error>,
) -> AppResult<T> {
    let form = form
        .map_err(|e| AppError::ValidationError(e.to_string()))?
        .into_inner();

    form.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(form)
}
