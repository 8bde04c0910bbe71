use super::config::Config;
use super::handler::{BoxHandler, Handler};
use super::params::Params;
use super::static_files::StaticFiles;
use super::{BoxFuture, Request, Response};
use crate::http_router::{HttpRouter, Method};
use crate::router::RouterError;

use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;

/// The request dispatcher.
///
/// Holds a frozen route table. Clones share it, so one instance can be handed
/// to every connection.
#[derive(Clone)]
pub struct RouterService {
    inner: Arc<Inner>,
}

struct Inner {
    router: HttpRouter<BoxHandler>,
    not_found: BoxHandler,
    static_files: Option<StaticFiles>,
}

impl RouterService {
    pub fn new(router: HttpRouter<BoxHandler>) -> Self {
        Self::with_config(router, Config::default())
    }

    pub fn with_config(router: HttpRouter<BoxHandler>, config: Config) -> Self {
        let Config {
            not_found,
            static_files,
        } = config;
        let inner = Inner {
            router,
            not_found,
            static_files,
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Dispatches one request.
    ///
    /// The matching handler runs with the captured [`Params`] attached to the
    /// request. Without a match, paths under the static prefix are served from
    /// disk and everything else goes to the not-found handler.
    ///
    /// Errors only for an unsupported method or an empty path. A panicking
    /// handler is not caught.
    pub async fn handle(&self, mut req: Request) -> Result<Response, RouterError> {
        let path = req.uri().path().to_owned();
        let mut res = Response::default();

        tracing::trace!(method = %req.method(), path = %path, "dispatching request");

        let found = self.inner.router.find(req.method(), &path)?;
        if let Some((handler, captures)) = found {
            tracing::debug!(method = %req.method(), path = %path, params = captures.len(), "route matched");
            req.extensions_mut().insert(Params::new(&path, &captures));
            handler.call(&req, &mut res);
            return Ok(res);
        }

        match self.inner.static_files {
            Some(ref files) if files.matches(&path) => {
                tracing::debug!(path = %path, "serving static asset");
                files.serve(&path, &mut res).await;
            }
            _ => {
                tracing::debug!(method = %req.method(), path = %path, "no route matched");
                self.inner.not_found.call(&req, &mut res);
            }
        }

        Ok(res)
    }
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = RouterError;
    type Future = BoxFuture<'static, Result<Response, RouterError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let service = self.clone();
        Box::pin(async move { service.handle(req).await })
    }
}

impl HttpRouter<BoxHandler> {
    pub fn route(
        &mut self,
        method: impl AsRef<str>,
        path: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> Result<&mut Self, RouterError> {
        self.try_insert(method, path, Box::new(h))
    }

    /// Freezes the table into a dispatcher with the default [`Config`].
    pub fn into_service(self) -> RouterService {
        RouterService::new(self)
    }

    pub fn into_service_with(self, config: Config) -> RouterService {
        RouterService::with_config(self, config)
    }
}

macro_rules! define_method {
    ($name:ident, $method:ident) => {
        pub fn $name(
            &mut self,
            path: &str,
            h: impl Handler + Send + Sync + 'static,
        ) -> Result<&mut Self, RouterError> {
            self.route(Method::$method, path, h)
        }
    };
}

impl HttpRouter<BoxHandler> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
}
