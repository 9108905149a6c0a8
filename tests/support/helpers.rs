// tests/support/helpers.rs
use super::memory::{InMemoryStore, ManualClock};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use newsroom_core::application::ports::{time::Clock, util::SlugGenerator};
use newsroom_core::application::services::{
    ApplicationServices, ArticleRepositories, ServiceOptions,
};
use newsroom_core::domain::article::WorkflowPolicy;
use newsroom_core::infrastructure::util::DefaultSlugGenerator;
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Services wired over one in-memory store and a hand-driven clock.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<ManualClock>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_options(ServiceOptions::default())
    }

    pub fn strict() -> Self {
        Self::with_options(ServiceOptions {
            workflow_policy: WorkflowPolicy::Strict,
            ..ServiceOptions::default()
        })
    }

    pub fn with_options(options: ServiceOptions) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let clock = Arc::new(ManualClock::default());
        let repos = ArticleRepositories {
            write: store.clone(),
            read: store.clone(),
            tags: store.clone(),
            revisions: store.clone(),
            views: store.clone(),
        };
        let clock_port: Arc<dyn Clock> = clock.clone();
        let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
        let services = Arc::new(ApplicationServices::new(repos, clock_port, slugger, options));

        Self {
            store,
            clock,
            services,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["http://localhost:3000".to_owned()])
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Asserts a JSON `{error, message}` body with the given status.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    assert_eq!(json["error"].as_str().unwrap_or(""), expected_error);
    assert!(
        !json["message"].as_str().unwrap_or("").is_empty(),
        "expected non-empty message"
    );
}
