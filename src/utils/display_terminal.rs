//! 서버 시작 과정 터미널 출력

use crate::config::{AppConfig, SessionBackend};

pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 활성화된 구성 요약 (비밀 값은 출력하지 않음)
pub fn print_startup_summary(config: &AppConfig) {
    let session_backend = match config.session.backend {
        SessionBackend::Redis => "redis",
        SessionBackend::Memory => "memory",
    };
    let enabled = |configured: bool| if configured { "enabled" } else { "disabled" };

    println!();
    print_boxed_title("🎉 SECRETS AUTH SERVICE READY");
    println!("   🌐 Public URL: {}", config.server.public_base_url);
    println!("   🗄️  Database: {}", config.database.name);
    println!("   🍪 Sessions: {} (ttl {}s)", session_backend, config.session.ttl_seconds);
    println!("   🔐 Google OAuth: {}", enabled(config.oauth.google.is_some()));
    println!("   🐦 Twitter OAuth: {}", enabled(config.oauth.twitter.is_some()));
    println!();
}
