//! A minimal HTTP request router.
//!
//! Handlers are registered against a method (`GET`, `POST`, `PUT` or `DELETE`)
//! and a path pattern such as `/users/:id/posts/:post-id`. A request is
//! dispatched to the first matching route of its method, in registration
//! order. Without a match, paths under a static prefix are served from disk
//! and anything else gets a 404.

#![forbid(unsafe_code)]

mod router;

pub use self::router::{Captures, Pattern, Router, RouterError};

#[cfg(feature = "http-router")]
pub mod http_router;

#[cfg(feature = "http-router")]
pub use self::http_router::{HttpRouter, Method};

#[cfg(feature = "hyper-service")]
pub mod hyper_service;

#[cfg(feature = "hyper-service")]
pub use self::hyper_service::{Config, Handler, Params, RequestExt, RouterService, StaticFiles};
