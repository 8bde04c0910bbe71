mod router;
mod router_macro;

pub use self::router::{HttpRouter, METHODS};
pub use http::Method;
