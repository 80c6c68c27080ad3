//! 시크릿 공유 인증 서비스
//!
//! 로컬 계정(사용자명/비밀번호)과 Google, Twitter 소셜 로그인을 하나의 사용자 레코드로
//! 묶고, 서버 측 세션으로 로그인 상태를 유지하는 Actix-web 애플리케이션입니다.
//! 로그인한 사용자는 익명 "시크릿" 하나를 등록할 수 있고, 모든 시크릿은 `/secrets`에
//! 공개됩니다.
//!
//! # Features
//!
//! - **로컬 인증**: bcrypt 해시 기반 가입/로그인
//! - **OAuth 2.0**: Google (Authorization Code), Twitter (Authorization Code + PKCE)
//! - **서버 측 세션**: `actix-session` 암호화 쿠키 + Redis(또는 인메모리) 세션 저장소
//! - **MongoDB**: 사용자 데이터 영구 저장, 식별 필드별 유니크 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Routes      │ ← 라우트 구성, 세션 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 폼 검증, 세션 조작, HTML/리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 가입/인증, OAuth, 계정 연동, 세션 관리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App, HttpServer};
//! use secrets_auth_service::{config::AppConfig, core::AppState, routes::configure_app};
//!
//! let config = AppConfig::from_env()?;
//! let state = web::Data::new(AppState::initialize(config).await?);
//!
//! HttpServer::new(move || App::new().configure(configure_app(state.clone())))
//!     .bind("0.0.0.0:3000")?
//!     .run()
//!     .await
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod views;
