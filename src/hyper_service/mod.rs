#![forbid(unsafe_code)]

mod config;
mod handler;
mod not_found;
mod params;
mod service;
mod static_files;

pub use self::config::Config;
pub use self::handler::{BoxHandler, Handler};
pub use self::not_found::not_found;
pub use self::params::{Params, RequestExt};
pub use self::service::RouterService;
pub use self::static_files::{content_type, AssetSink, Encoding, StaticFiles};

use std::future::Future;
use std::pin::Pin;

pub type Request = hyper::Request<hyper::Body>;
pub type Response = hyper::Response<hyper::Body>;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
