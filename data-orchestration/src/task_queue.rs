//! Task queue client configuration
//!
//! The service declares a broker-backed task queue with separate broker
//! and result-store endpoints (distinct logical databases on the same
//! Redis instance). No producer or consumer is wired up yet; only the
//! client handles exist.

use crate::error::OrchestrationResult;

/// Broker and result-store endpoints for the task queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQueueConfig {
    pub broker_url: String,
    pub result_backend_url: String,
}

impl Default for TaskQueueConfig {
    fn default() -> Self {
        Self {
            broker_url: "redis://localhost:6379/2".to_string(),
            result_backend_url: "redis://localhost:6379/3".to_string(),
        }
    }
}

/// Client handles for the task queue broker and result store.
///
/// `redis::Client::open` validates the URL without opening a connection,
/// so construction succeeds even when the broker is unreachable; only a
/// malformed URL fails startup.
#[cfg(feature = "task-queue")]
#[derive(Clone)]
pub struct TaskQueueClient {
    broker: redis::Client,
    result_backend: redis::Client,
}

#[cfg(feature = "task-queue")]
impl TaskQueueClient {
    pub fn new(config: &TaskQueueConfig) -> OrchestrationResult<Self> {
        let broker = redis::Client::open(config.broker_url.as_str())?;
        let result_backend = redis::Client::open(config.result_backend_url.as_str())?;

        Ok(Self {
            broker,
            result_backend,
        })
    }

    pub fn broker(&self) -> &redis::Client {
        &self.broker
    }

    pub fn result_backend(&self) -> &redis::Client {
        &self.result_backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_redis() {
        let config = TaskQueueConfig::default();
        assert_eq!(config.broker_url, "redis://localhost:6379/2");
        assert_eq!(config.result_backend_url, "redis://localhost:6379/3");
    }

    #[cfg(feature = "task-queue")]
    #[test]
    fn client_construction_is_lazy() {
        // No Redis is running in the test environment; construction must
        // still succeed because the client only parses the URL.
        let client = TaskQueueClient::new(&TaskQueueConfig::default()).unwrap();
        assert_eq!(
            client.broker().get_connection_info().redis.db,
            2,
        );
        assert_eq!(
            client.result_backend().get_connection_info().redis.db,
            3,
        );
    }

    #[cfg(feature = "task-queue")]
    #[test]
    fn malformed_broker_url_fails_construction() {
        let config = TaskQueueConfig {
            broker_url: "not-a-redis-url".to_string(),
            ..TaskQueueConfig::default()
        };

        assert!(TaskQueueClient::new(&config).is_err());
    }
}
