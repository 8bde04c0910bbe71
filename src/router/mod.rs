mod captures;
mod error;
mod imp;
mod pattern;

pub use self::captures::Captures;
pub use self::error::RouterError;
pub use self::pattern::Pattern;

/// Ordered route list for a single method.
///
/// Routes are tried in insertion order and the first match wins.
#[derive(Debug)]
pub struct Router<T> {
    routes: Vec<Route<T>>,
}

#[derive(Debug)]
struct Route<T> {
    pattern: Pattern,
    data: T,
}
