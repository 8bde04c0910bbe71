#[macro_export]
macro_rules! http_router {
    {@entry $router:expr, GET, $pattern:expr, $data:expr} => {
        $router.insert($crate::http_router::Method::GET, $pattern, $data)
    };
    {@entry $router:expr, POST, $pattern:expr, $data:expr} => {
        $router.insert($crate::http_router::Method::POST, $pattern, $data)
    };
    {@entry $router:expr, PUT, $pattern:expr, $data:expr} => {
        $router.insert($crate::http_router::Method::PUT, $pattern, $data)
    };
    {@entry $router:expr, DELETE, $pattern:expr, $data:expr} => {
        $router.insert($crate::http_router::Method::DELETE, $pattern, $data)
    };

    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let mut __router = $crate::http_router::HttpRouter::new();
        $($crate::http_router!(@entry __router, $method, $pattern, $data);)+
        __router
    }};
}
