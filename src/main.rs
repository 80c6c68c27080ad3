//! 시크릿 공유 인증 서비스 메인 애플리케이션
//!
//! 설정을 한 번 로드하고 MongoDB, 세션 저장소를 초기화한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use secrets_auth_service::config::AppConfig;
use secrets_auth_service::core::AppState;
use secrets_auth_service::routes::configure_app;
use secrets_auth_service::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 시크릿 인증 서비스 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("❌ 설정 로드 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let state = AppState::initialize(config).await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    print_startup_summary(&state.config);
    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(web::Data::new(state)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
/// 워커마다 같은 [`AppState`]를 공유합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = state.config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let limits = &state.config.rate_limit;
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(limits.per_second)
        .burst_size(limits.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", limits.per_second, limits.burst_size);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_app(state.clone()))
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    info!("Current profile: {}", profile);

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
            return;
        }
    };

    // 파일이 없어도 프로세스 환경 변수만으로 기동할 수 있음
    match dotenv::from_filename(filename) {
        Ok(_) => info!("{} 파일 로드 됨", filename),
        Err(e) => warn!("{} 파일 로드 실패: {}", filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 "info,actix_web=debug"를 사용합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}
