//! Shared `bb8` pool of multiplexed Redis connections.

use std::time::Duration;

use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::Pool;

/// Pool type shared by every Redis adapter.
pub type RedisPool = Pool<RedisConnectionManager>;

/// Errors raised while building the Redis pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RedisPoolError {
    /// The URL could not be parsed.
    #[error("invalid redis url: {message}")]
    InvalidUrl { message: String },
    /// The pool could not be constructed.
    #[error("failed to build redis pool: {message}")]
    Build { message: String },
}

/// Build a pool for `redis_url`.
///
/// Connections are opened lazily, so an unreachable server surfaces on the
/// first checkout instead of at startup. Each checkout gives up after
/// `checkout_timeout`.
///
/// # Errors
///
/// Returns [`RedisPoolError`] when the URL is malformed.
pub async fn connect(
    redis_url: &str,
    checkout_timeout: Duration,
) -> Result<RedisPool, RedisPoolError> {
    let manager =
        RedisConnectionManager::new(redis_url).map_err(|err| RedisPoolError::InvalidUrl {
            message: err.to_string(),
        })?;
    Pool::builder()
        .max_size(8)
        .min_idle(Some(0))
        .connection_timeout(checkout_timeout)
        .build(manager)
        .await
        .map_err(|err| RedisPoolError::Build {
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Instant;

    #[rstest]
    #[tokio::test]
    async fn rejects_malformed_url() {
        let err = connect("not a url", Duration::from_secs(1))
            .await
            .expect_err("malformed url");
        assert!(matches!(err, RedisPoolError::InvalidUrl { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn checkout_against_unreachable_server_gives_up_quickly() {
        let pool = connect("redis://127.0.0.1:9", Duration::from_millis(100))
            .await
            .expect("lazy pool builds");

        let started = Instant::now();
        let checkout = pool.get().await;

        assert!(checkout.is_err());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
