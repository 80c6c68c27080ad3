use std::sync::Arc;
use actix_session::storage::RedisSessionStore;
use actix_web::cookie::Key;
use log::{info, warn};
use crate::{
    config::{AppConfig, SessionBackend},
    db::Database,
    errors::{AppError, AppResult},
    repositories::{
        sessions::MemorySessionStore,
        users::{memory_user_repo::MemoryUserRepository, user_repo::UserRepository, UserStore},
    },
    services::{
        auth::{session_key, IdentityFederator, OAuthService, SessionBackendStore},
        users::UserService,
    },
    utils::display_terminal::{print_boxed_title, print_step_complete, print_step_start, print_sub_task},
};

/// 요청 간에 공유되는 애플리케이션 상태
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<UserService>,
    pub federator: Arc<IdentityFederator>,
    pub oauth: Arc<OAuthService>,
    pub session_store: SessionBackendStore,
    /// 세션 쿠키 암호화 키
    pub session_key: Key,
}

impl AppState {
    /// 주어진 저장소 구현으로 서비스들을 조립합니다
    pub fn new(
        config: AppConfig,
        user_store: Arc<dyn UserStore>,
        session_store: SessionBackendStore,
    ) -> AppResult<Self> {
        let config = Arc::new(config);

        Ok(Self {
            users: Arc::new(UserService::new(user_store.clone(), config.bcrypt_cost)),
            federator: Arc::new(IdentityFederator::new(user_store)),
            oauth: Arc::new(OAuthService::new(config.clone())?),
            session_store,
            session_key: session_key(&config.session.secret)?,
            config,
        })
    }

    /// 인메모리 저장소로 조립 (개발/테스트)
    pub fn in_memory(config: AppConfig) -> AppResult<Self> {
        Self::new(
            config,
            Arc::new(MemoryUserRepository::new()),
            SessionBackendStore::Memory(MemorySessionStore::new()),
        )
    }

    /// 설정에 따라 MongoDB와 세션 저장소에 연결하고 초기화합니다
    pub async fn initialize(config: AppConfig) -> AppResult<Self> {
        print_boxed_title("🚀 SECRETS AUTH SERVICE");

        print_step_start(1, "Connecting user store");
        let database = Database::connect(&config.database)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 연결 실패: {}", e)))?;
        let user_store: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
        user_store.init().await?;
        print_sub_task("MongoDB", database.database_name());
        print_step_complete(1, "User store ready");

        print_step_start(2, "Connecting session store");
        let session_store = match config.session.backend {
            SessionBackend::Redis => {
                let redis = RedisSessionStore::new(config.session.redis_url.as_str())
                    .await
                    .map_err(|e| AppError::SessionError(format!("Redis 연결 실패: {}", e)))?;
                print_sub_task("Redis", &config.session.redis_url);
                SessionBackendStore::Redis(redis)
            }
            SessionBackend::Memory => {
                if config.environment.is_production() {
                    warn!("⚠️  운영 환경에서 인메모리 세션 저장소를 사용합니다. 재시작 시 모든 세션이 사라집니다");
                }
                print_sub_task("Memory", "in-process");
                SessionBackendStore::Memory(MemorySessionStore::new())
            }
        };
        print_step_complete(2, "Session store ready");

        let state = Self::new(config, user_store, session_store)?;
        info!("✅ 애플리케이션 상태 초기화 완료");
        Ok(state)
    }
}
