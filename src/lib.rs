use redis::Client as RedisClient;
use sqlx::PgPool;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, cache, db, utils};

use auth::jwt::JwtService;
use cache::revalidate::RedisPathInvalidator;
use repositories::sqlx_repo::SqlxProjectRepo;
use use_cases::projects::ProjectHandler;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub jwt_service: JwtService,
    pub redis_client: Option<RedisClient>,
    pub read_pool: PgPool,
    pub write_pool: PgPool,
}

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo, RedisPathInvalidator>;

impl AppState {
    pub fn new(config: &settings::AppConfig, read_pool: PgPool, write_pool: PgPool) -> Self {
        let jwt_service = JwtService::new(config);

        let redis_client = config.redis_url.as_ref().and_then(|url| {
            RedisClient::open(url.as_str())
                .map_err(|e| tracing::error!("Redis connection error: {}", e))
                .ok()
        });

        let project_repo = SqlxProjectRepo::new(read_pool.clone(), write_pool.clone());
        let invalidator = RedisPathInvalidator::new(redis_client.clone());
        let project_handler = ProjectHandler::new(project_repo, invalidator);

        AppState {
            project_handler,
            jwt_service,
            redis_client,
            read_pool,
            write_pool,
        }
    }
}
