use beak_router::{Pattern, Router, RouterError};

#[test]
fn router_common() {
    let mut router: Router<usize> = Router::new();
    router
        .insert("/user/:user_id/post/:post_id", 1)
        .insert("/user/:user_id/profile", 2)
        .insert("/user/:user_id/", 3)
        .insert("/explore", 4)
        .insert("/static/app.js", 5);

    let cases: &[(_, _, &[(&str, &str)])] = &[
        (
            "/user/asd/post/123",
            1,
            &[("user_id", "asd"), ("post_id", "123")],
        ),
        ("/user/asd/profile", 2, &[("user_id", "asd")]),
        ("/user/asd/", 3, &[("user_id", "asd")]),
        ("/explore", 4, &[]),
        ("/static/app.js", 5, &[]),
    ];

    for &(url, data, captures) in cases.iter() {
        let ret = router.find(url).unwrap();
        assert_eq!(*ret.0, data, "url = {:?}", url);
        assert_eq!(&*ret.1, captures, "url = {:?}", url);
    }
}

#[test]
fn router_single() {
    let mut router: Router<usize> = Router::new();
    router.insert("/hello/:name", 1);

    assert_eq!(*router.find("/hello/world").unwrap().0, 1);
    assert!(router.find("/hello/world/asd").is_none());
    assert!(router.find("/hello/").is_none());
    assert!(router.find("/hello").is_none());
    assert!(router.find("/say/hello/world").is_none());
}

#[test]
fn router_first_match_wins() {
    let mut router: Router<usize> = Router::new();
    router.insert("/u/:id", 1).insert("/u/me", 2);

    let (data, caps) = router.find("/u/me").unwrap();
    assert_eq!(*data, 1);
    assert_eq!(caps.get("id"), Some("me"));
}

#[test]
fn router_collision() {
    let mut router: Router<usize> = Router::new();
    assert!(router.try_insert("/u/:id/p/:pid", 1).is_ok());
    assert!(matches!(
        router.try_insert("/U/:uid/P/:name", 2),
        Err(RouterError::DuplicatePath(_))
    ));
    assert_eq!(router.len(), 1);

    let mut router: Router<usize> = Router::new();
    assert!(router.try_insert("/test/path/", 1).is_ok());
    assert!(router.try_insert("/test/path/", 2).is_err());
    assert!(router.try_insert("/test/path", 3).is_ok());
    assert!(router.try_insert("/test/:path/", 4).is_ok());
}

#[test]
#[should_panic(expected = "path pattern already registered")]
fn router_insert_panics_on_collision() {
    let mut router: Router<usize> = Router::new();
    router.insert("/a", 1).insert("/A", 2);
}

#[test]
fn router_case_insensitive() {
    let mut router: Router<usize> = Router::new();
    router.insert("/Hello/:Name", 1);

    let (data, caps) = router.find("/HELLO/World").unwrap();
    assert_eq!(*data, 1);
    assert_eq!(caps.get("name"), Some("World"));
}

#[test]
fn router_find_mut() {
    let mut router: Router<usize> = Router::new();
    router.insert("/count/:n", 0);

    {
        let (data, caps) = router.find_mut("/count/7").unwrap();
        *data += caps.parse::<usize>("n").unwrap().unwrap();
    }
    assert_eq!(*router.find("/count/1").unwrap().0, 7);
}

#[test]
fn pattern_params() {
    let p = Pattern::compile("/test/:optional/:path/").unwrap();
    assert_eq!(p.names().collect::<Vec<_>>(), ["optional", "path"]);

    let caps = p.captures("/test/3/list/").unwrap();
    assert_eq!(caps.get("optional"), Some("3"));
    assert_eq!(caps.get("path"), Some("list"));

    let p = Pattern::compile("/test/path/").unwrap();
    assert_eq!(p.names().len(), 0);
    assert!(p.captures("/test/path/").unwrap().is_empty());
}

#[test]
fn pattern_names_in_order() {
    let specs: &[(&str, &[&str])] = &[
        ("/", &[]),
        ("/:a", &["a"]),
        ("/:a/x/:b-c/:d_e", &["a", "b-c", "d_e"]),
        ("/:z/:y/:x", &["z", "y", "x"]),
    ];
    for &(spec, names) in specs.iter() {
        let p = Pattern::compile(spec).unwrap();
        assert_eq!(p.names().collect::<Vec<_>>(), names, "spec = {:?}", spec);
    }
}

#[test]
fn pattern_segment_boundaries() {
    let p = Pattern::compile("/files/:name").unwrap();
    assert!(p.is_match("/files/a.txt"));
    assert!(!p.is_match("/files/a/b.txt"));
    assert!(!p.is_match("/files/"));
    assert!(!p.is_match("/x/files/a"));
}

#[test]
fn pattern_errors() {
    assert!(matches!(Pattern::compile(""), Err(RouterError::InvalidPath)));
    assert!(matches!(
        Pattern::compile("/u/:id/p/:id"),
        Err(RouterError::DuplicateParam(ref name)) if name == "id"
    ));
}

#[test]
fn pattern_structural_equality() {
    let a = Pattern::compile("/u/:id").unwrap();
    let b = Pattern::compile("/U/:name").unwrap();
    let c = Pattern::compile("/u/:id/").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
