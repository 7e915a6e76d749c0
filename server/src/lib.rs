mod config;

use axum::{Router, routing::get};
use tracing_subscriber::{EnvFilter, filter::ParseError};

pub use crate::config::Config;

const DEFAULT_FILTER: &str = "info";

/// Install the global fmt subscriber. Later calls are no-ops.
pub fn init_tracing(config: &Config) {
    let (filter, invalid) = env_filter(&config.log_filter);

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        return;
    }

    if let Some(e) = invalid {
        tracing::warn!(
            filter = %config.log_filter,
            error = %e,
            "invalid log filter, falling back to {DEFAULT_FILTER}"
        );
    }
}

/// Parse filter directives, falling back to [`DEFAULT_FILTER`] when they are
/// invalid. The parse error is handed back so it can be logged once a
/// subscriber exists.
fn env_filter(directives: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
    }
}

/// Server-side routes merged next to the Dioxus app router.
pub fn router(config: &Config) -> Router {
    let router = Router::new();

    if config.health_check {
        router.route("/healthz", get(health))
    } else {
        router
    }
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn send(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn healthz_answers_ok_by_default() {
        let (status, body) = send(router(&Config::default()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn healthz_absent_when_disabled() {
        let config = Config {
            health_check: false,
            ..Config::default()
        };
        let (status, _) = send(router(&config), "/healthz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn valid_filter_is_kept() {
        let (filter, invalid) = env_filter("debug");
        assert!(invalid.is_none());
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn invalid_filter_falls_back_to_info() {
        let (filter, invalid) = env_filter("web=loudest");
        assert!(invalid.is_some());
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn init_tracing_survives_invalid_filter() {
        init_tracing(&Config {
            log_filter: "web=loudest".into(),
            ..Config::default()
        });
    }
}
