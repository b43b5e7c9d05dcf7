use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{http::Request, response::Response};
use futures_util::future::{self, Either, Ready};
use tower::{Layer, Service};

use pathgate_core::{escape_path, CompiledFilter, Decision, PathFilterConfig, Result};

use super::response::blocked_response;

/// Named, pre-compiled filter ready to wrap a next handler.
#[derive(Debug, Clone)]
pub struct PathFilterLayer {
    name: Arc<str>,
    compiled: Arc<CompiledFilter>,
}

impl PathFilterLayer {
    /// Validate and compile `config`. Fails on the first invalid pattern.
    pub fn new(name: impl Into<String>, config: &PathFilterConfig) -> Result<Self> {
        let name: Arc<str> = Arc::from(name.into());
        let compiled = CompiledFilter::compile(config)?;

        tracing::info!(
            filter = %name,
            mode = compiled.mode().as_str(),
            patterns = compiled.active().len(),
            "path filter compiled"
        );

        Ok(Self {
            name,
            compiled: Arc::new(compiled),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S> Layer<S> for PathFilterLayer {
    type Service = PathFilter<S>;

    fn layer(&self, inner: S) -> Self::Service {
        PathFilter {
            inner,
            name: Arc::clone(&self.name),
            compiled: Arc::clone(&self.compiled),
        }
    }
}

/// Filter instance: compiled patterns + the next handler in the chain.
#[derive(Debug, Clone)]
pub struct PathFilter<S> {
    inner: S,
    name: Arc<str>,
    compiled: Arc<CompiledFilter>,
}

impl<S> PathFilter<S> {
    pub fn new(inner: S, name: impl Into<String>, config: &PathFilterConfig) -> Result<Self> {
        Ok(PathFilterLayer::new(name, config)?.layer(inner))
    }
}

impl<S, B> Service<Request<B>> for PathFilter<S>
where
    S: Service<Request<B>, Response = Response>,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Either<Ready<std::result::Result<Response, S::Error>>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        {
            // The escaped form borrows `req`; it must be gone before `req` moves on.
            let path = escape_path(req.uri().path());

            if self.compiled.decide(&path) == Decision::Deny {
                tracing::debug!(filter = %self.name, %path, "path blocked");
                return Either::Left(future::ready(Ok(blocked_response())));
            }
        }

        Either::Right(self.inner.call(req))
    }
}
