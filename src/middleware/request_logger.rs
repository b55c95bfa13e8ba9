//! Request/response logging middleware.
//!
//! Emits one structured line when a request is received and another after
//! the inner service produced a response. Either side can be disabled
//! independently, and matching paths are exempted entirely.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response};
use futures_util::future::BoxFuture;
use serde_json::{json, Value};
use tower::{Layer, Service};

use crate::config::schema::{RequestLoggerConfig, Verbosity};
use crate::error::RequestLoggerResult;
use crate::logging::dual::DualLogger;
use crate::logging::provider::LogProvider;
use crate::middleware::skip::should_skip;

/// Layer inserting the request logger into the middleware chain.
#[derive(Clone)]
pub struct RequestLoggerLayer {
    loggers: Arc<DualLogger>,
    config: Arc<RequestLoggerConfig>,
}

impl RequestLoggerLayer {
    /// Build the layer, obtaining both logger handles from the provider.
    ///
    /// Handle acquisition happens exactly once, here; a provider failure
    /// aborts setup rather than surfacing per request.
    pub fn new(
        provider: &dyn LogProvider,
        config: RequestLoggerConfig,
    ) -> RequestLoggerResult<Self> {
        let loggers = DualLogger::new(provider)?;
        Ok(Self {
            loggers: Arc::new(loggers),
            config: Arc::new(config),
        })
    }
}

impl<S> Layer<S> for RequestLoggerLayer {
    type Service = RequestLogger<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogger {
            inner,
            loggers: self.loggers.clone(),
            config: self.config.clone(),
        }
    }
}

/// The middleware service wrapping the rest of the chain.
///
/// Stateless per call; configuration and handles are shared read-only
/// across every clone, so concurrent requests need no coordination.
#[derive(Clone)]
pub struct RequestLogger<S> {
    inner: S,
    loggers: Arc<DualLogger>,
    config: Arc<RequestLoggerConfig>,
}

impl<S> Service<Request<Body>> for RequestLogger<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let loggers = self.loggers.clone();
        let config = self.config.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let verbosity = Verbosity::resolve(config.verbosity);
            let method = request.method().clone();
            let path = request.uri().path().to_string();
            let suppressed = should_skip(&path, config.skip.as_deref());

            if !suppressed && !config.skip_input {
                loggers.emit_input(verbosity, &format!("[{}: {}]", method, path), None);
            }

            // Single suspension point. A failure propagates unchanged and
            // the outbound line is never emitted.
            let response = inner.call(request).await?;

            if !suppressed && !config.skip_output {
                loggers.emit_output(
                    verbosity,
                    &format!("[{}: {}][{}]", method, path, response.status().as_u16()),
                    Some(&response_metadata(&response)),
                );
            }

            Ok(response)
        })
    }
}

/// Insert the request logger into an axum router's middleware chain.
///
/// Convenience factory for the common case: obtain the handles, apply
/// the layer, hand the router back.
pub fn register(
    router: axum::Router,
    provider: &dyn LogProvider,
    config: RequestLoggerConfig,
) -> RequestLoggerResult<axum::Router> {
    let layer = RequestLoggerLayer::new(provider, config)?;
    Ok(router.layer(layer))
}

/// Response status and headers as structured metadata for the outbound
/// emission. Header values that are not valid UTF-8 are lossily decoded.
fn response_metadata(response: &Response<Body>) -> Value {
    let headers: serde_json::Map<String, Value> = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            )
        })
        .collect();
    json!({
        "status": response.status().as_u16(),
        "headers": headers,
    })
}
