use async_trait::async_trait;
use redis::AsyncCommands;

use crate::errors::AppError;

pub fn page_cache_key(path: &str) -> String {
    format!("page_cache:{}", path)
}

/// Coarse path-based invalidation of cached public views. Implementations
/// drop whole rendered pages, not individual fields.
#[async_trait]
pub trait PathInvalidator: Sync + Send {
    async fn invalidate(&self, path: &str) -> Result<(), AppError>;
}

/// Deletes the `page_cache:{path}` key in Redis. When no cache is configured
/// the invalidation degrades to a no-op.
pub struct RedisPathInvalidator {
    client: Option<redis::Client>,
}

impl RedisPathInvalidator {
    pub fn new(client: Option<redis::Client>) -> Self {
        RedisPathInvalidator { client }
    }

    pub fn from_url(redis_url: Option<&str>) -> Self {
        let client = redis_url.and_then(|url| {
            redis::Client::open(url)
                .map_err(|e| tracing::error!("Redis connection error: {}", e))
                .ok()
        });

        RedisPathInvalidator { client }
    }
}

#[async_trait]
impl PathInvalidator for RedisPathInvalidator {
    async fn invalidate(&self, path: &str) -> Result<(), AppError> {
        let Some(client) = &self.client else {
            tracing::debug!("No cache configured, skipping invalidation of {}", path);
            return Ok(());
        };

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::InternalError(format!("Cache connection failed: {}", e)))?;

        let _: () = conn
            .del(page_cache_key(path))
            .await
            .map_err(|e| AppError::InternalError(format!("Cache invalidation failed: {}", e)))?;

        tracing::debug!("Invalidated cached view: {}", path);
        Ok(())
    }
}
