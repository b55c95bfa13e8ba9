//! Shared utilities for integration testing.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use http_request_logger::{
    register, LogHandle, LogProvider, RequestLoggerConfig, RequestLoggerError, Verbosity,
};

/// One recorded emission: handle name, verbosity method, message, metadata.
#[derive(Debug, Clone)]
pub struct Emission {
    pub logger: String,
    pub verbosity: Verbosity,
    pub message: String,
    pub metadata: Option<Value>,
}

/// Log provider that records every emission for later assertions.
#[derive(Clone, Default)]
pub struct RecordingProvider {
    emissions: Arc<Mutex<Vec<Emission>>>,
    handle_names: Arc<Mutex<Vec<String>>>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> Vec<Emission> {
        self.emissions.lock().unwrap().clone()
    }

    pub fn handle_names(&self) -> Vec<String> {
        self.handle_names.lock().unwrap().clone()
    }

    pub fn emissions_for(&self, logger: &str) -> Vec<Emission> {
        self.emissions()
            .into_iter()
            .filter(|emission| emission.logger == logger)
            .collect()
    }
}

impl LogProvider for RecordingProvider {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn LogHandle>, RequestLoggerError> {
        self.handle_names.lock().unwrap().push(name.to_string());
        Ok(Arc::new(RecordingHandle {
            name: name.to_string(),
            emissions: self.emissions.clone(),
        }))
    }
}

struct RecordingHandle {
    name: String,
    emissions: Arc<Mutex<Vec<Emission>>>,
}

impl RecordingHandle {
    fn record(&self, verbosity: Verbosity, message: &str, metadata: Option<&Value>) {
        self.emissions.lock().unwrap().push(Emission {
            logger: self.name.clone(),
            verbosity,
            message: message.to_string(),
            metadata: metadata.cloned(),
        });
    }
}

impl LogHandle for RecordingHandle {
    fn debug(&self, message: &str, metadata: Option<&Value>) {
        self.record(Verbosity::Debug, message, metadata);
    }

    fn info(&self, message: &str, metadata: Option<&Value>) {
        self.record(Verbosity::Info, message, metadata);
    }

    fn warn(&self, message: &str, metadata: Option<&Value>) {
        self.record(Verbosity::Warn, message, metadata);
    }

    fn error(&self, message: &str, metadata: Option<&Value>) {
        self.record(Verbosity::Error, message, metadata);
    }

    fn log(&self, message: &str, metadata: Option<&Value>) {
        self.record(Verbosity::Log, message, metadata);
    }
}

/// Provider whose handle acquisition always fails.
pub struct FailingProvider;

impl LogProvider for FailingProvider {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn LogHandle>, RequestLoggerError> {
        Err(RequestLoggerError::Handle {
            name: name.to_string(),
            reason: "provider offline".to_string(),
        })
    }
}

async fn mock_handler() -> impl IntoResponse {
    ([("x-backend", "mock")], "ok")
}

/// Build a catch-all router wrapped with the request logger.
pub fn app(provider: &RecordingProvider, config: RequestLoggerConfig) -> Router {
    let router = Router::new()
        .route("/", get(mock_handler))
        .route("/{*path}", get(mock_handler));
    register(router, provider, config).expect("register request logger")
}

/// Send a GET request through the router and return the response.
pub async fn send(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("build request");
    app.oneshot(request).await.expect("infallible router")
}
