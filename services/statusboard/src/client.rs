//! Typed client for the reporting backend's JSON endpoints

use std::sync::Arc;

use crate::config::BackendConfig;
use crate::io::HttpClient;
use crate::model::{BackendHealth, LogBundle, StatusSnapshot};

/// Client for the status/log-reporting backend
pub struct DashboardClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for DashboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DashboardClient {
    pub fn new(config: &BackendConfig, http: Arc<dyn HttpClient>) -> Self {
        let base_url = config.base_url();
        tracing::debug!("Created DashboardClient for {}", base_url);
        Self { base_url, http }
    }

    /// Fetch the current status snapshot from `GET /api/status`
    pub async fn fetch_status(&self) -> crate::Result<StatusSnapshot> {
        let body = self.get_ok("/api/status").await?;
        let snapshot = serde_json::from_str(&body)?;
        Ok(snapshot)
    }

    /// Fetch the full log listing from `GET /api/logs`
    pub async fn fetch_logs(&self) -> crate::Result<LogBundle> {
        let body = self.get_ok("/api/logs").await?;
        let bundle = serde_json::from_str(&body)?;
        Ok(bundle)
    }

    /// Fetch the backend's own configuration from `GET /api/config`.
    ///
    /// The shape is backend-defined, so it stays an opaque JSON document.
    pub async fn fetch_backend_config(&self) -> crate::Result<serde_json::Value> {
        let body = self.get_ok("/api/config").await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// Probe backend reachability via `GET /health`
    pub async fn probe_health(&self) -> crate::Result<BackendHealth> {
        let body = self.get_ok("/health").await?;
        let health = serde_json::from_str(&body)?;
        Ok(health)
    }

    async fn get_ok(&self, path: &str) -> crate::Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).await?;

        if response.status != 200 {
            return Err(crate::StatusboardError::Transport(format!(
                "GET {} returned status {}",
                url, response.status
            )));
        }

        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{HttpResponse, MockHttpClient};
    use tokio_test::assert_err;

    fn test_config() -> BackendConfig {
        BackendConfig {
            host: "localhost".to_string(),
            port: 5000,
        }
    }

    fn ok_response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn fetch_status_parses_snapshot() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "http://localhost:5000/api/status")
            .returning(|_| {
                Box::pin(async {
                    Ok(ok_response(
                        r#"{"active": true, "checks_performed": 7, "duration": "1h2m", "current_time": "12:00:00"}"#,
                    ))
                })
            });

        let client = DashboardClient::new(&test_config(), Arc::new(mock));
        let snapshot = client.fetch_status().await.unwrap();
        assert!(snapshot.active);
        assert_eq!(snapshot.checks_performed, 7);
    }

    #[tokio::test]
    async fn fetch_status_propagates_transport_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Box::pin(async {
                Err(crate::StatusboardError::Transport(
                    "connection refused".to_string(),
                ))
            })
        });

        let client = DashboardClient::new(&test_config(), Arc::new(mock));
        let err = client.fetch_status().await.unwrap_err();
        assert!(matches!(err, crate::StatusboardError::Transport(_)));
    }

    #[tokio::test]
    async fn fetch_status_rejects_non_200() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 500,
                    body: "Internal Server Error".to_string(),
                })
            })
        });

        let client = DashboardClient::new(&test_config(), Arc::new(mock));
        let err = client.fetch_status().await.unwrap_err();
        match err {
            crate::StatusboardError::Transport(msg) => {
                assert!(msg.contains("status 500"), "{msg}");
            }
            other => panic!("expected Transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_status_rejects_malformed_body() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_| Box::pin(async { Ok(ok_response("not json")) }));

        let client = DashboardClient::new(&test_config(), Arc::new(mock));
        let err = client.fetch_status().await.unwrap_err();
        assert!(matches!(err, crate::StatusboardError::Format(_)));
    }

    #[tokio::test]
    async fn fetch_logs_preserves_order() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "http://localhost:5000/api/logs")
            .returning(|_| Box::pin(async { Ok(ok_response(r#"{"logs": ["a", "b", "c"]}"#)) }));

        let client = DashboardClient::new(&test_config(), Arc::new(mock));
        let bundle = client.fetch_logs().await.unwrap();
        assert_eq!(bundle.logs, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn fetch_logs_rejects_wrong_shape() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_| Box::pin(async { Ok(ok_response(r#"{"lines": []}"#)) }));

        let client = DashboardClient::new(&test_config(), Arc::new(mock));
        assert_err!(client.fetch_logs().await);
    }

    #[tokio::test]
    async fn fetch_backend_config_returns_raw_json() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "http://localhost:5000/api/config")
            .returning(|_| {
                Box::pin(async { Ok(ok_response(r#"{"monitoring_interval": 10}"#)) })
            });

        let client = DashboardClient::new(&test_config(), Arc::new(mock));
        let value = client.fetch_backend_config().await.unwrap();
        assert_eq!(value["monitoring_interval"], 10);
    }

    #[tokio::test]
    async fn probe_health_parses_payload() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "http://localhost:5000/health")
            .returning(|_| {
                Box::pin(async {
                    Ok(ok_response(
                        r#"{"status": "healthy", "timestamp": "12:00:00", "bot_active": true}"#,
                    ))
                })
            });

        let client = DashboardClient::new(&test_config(), Arc::new(mock));
        let health = client.probe_health().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert!(health.bot_active);
    }
}
