//! # Database Module
//!
//! MongoDB 연결을 관리합니다. 연결 정보는 [`DatabaseConfig`]로 전달받으며,
//! 시작 시 `ping` 명령으로 연결을 확인합니다.
//!
//! ```rust,ignore
//! let database = Database::connect(&config.database).await?;
//! let users = UserRepository::new(&database);
//! users.init().await?;
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 연결을 만들고 `ping`으로 확인합니다
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;
        client_options.app_name = Some("secrets_auth".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.name);

        Ok(Self {
            client,
            database_name: config.name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
