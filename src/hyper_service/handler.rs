use super::{Request, Response};

/// A request handler.
///
/// The handler owns completion of the response: whatever it leaves in `res`
/// is what the client receives. Captured path parameters are available
/// through [`RequestExt::params`](super::RequestExt::params).
pub trait Handler {
    fn call(&self, req: &Request, res: &mut Response);
}

pub type BoxHandler = Box<dyn Handler + Send + Sync>;

impl Handler for BoxHandler {
    fn call(&self, req: &Request, res: &mut Response) {
        Handler::call(&**self, req, res)
    }
}

impl<F> Handler for F
where
    F: Fn(&Request, &mut Response),
{
    fn call(&self, req: &Request, res: &mut Response) {
        (self)(req, res)
    }
}
