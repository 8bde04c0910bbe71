use super::{Request, Response};

use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use hyper::Body;

/// The default not-found responder: `404`, `Content-Type: text/html`, empty body.
pub fn not_found(_: &Request, res: &mut Response) {
    *res.status_mut() = StatusCode::NOT_FOUND;
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
    *res.body_mut() = Body::empty();
}
