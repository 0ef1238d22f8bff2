//! Matching and dispatch through the public router API.

use reitti::{MatchError, ReittiError, Router, variadic};

mod common;
use common::{TestContext, echo_args, strings};

struct Case {
    name: &'static str,
    routes: &'static [&'static str],
    path: &'static str,
    want_match_err: Option<&'static str>,
    want: &'static [&'static str],
}

#[test]
fn test_router_table() {
    let cases = [
        Case {
            name: "empty router",
            routes: &[],
            path: "repos/wolverian/reitti/issues",
            want_match_err: Some(r#"no handler found for route: "repos/wolverian/reitti/issues""#),
            want: &[],
        },
        Case {
            name: "empty path",
            routes: &["repos/{owner}/{repo}/issues"],
            path: "",
            want_match_err: Some(r#"no handler found for route: """#),
            want: &[],
        },
        Case {
            name: "no matching handler",
            routes: &["repos/{owner}/{repo}/issues"],
            path: "repos/wolverian/reitti",
            want_match_err: Some(r#"no handler found for route: "repos/wolverian/reitti""#),
            want: &[],
        },
        Case {
            name: "github issues",
            routes: &["repos/{owner}/{repo}/issues"],
            path: "repos/wolverian/reitti/issues",
            want_match_err: None,
            want: &["wolverian", "reitti"],
        },
        Case {
            name: "multiple routes",
            routes: &[
                "repos/{owner}",
                "repos/{owner}/{repo}",
                "repos/{owner}/{repo}/issues/{issue}",
                "repos/{owner}/{repo}/issues",
                "repos/{owner}/{repo}/issues/{issue}",
            ],
            path: "repos/wolverian/reitti/issues",
            want_match_err: None,
            want: &["wolverian", "reitti"],
        },
        Case {
            name: "literal only",
            routes: &["health"],
            path: "health",
            want_match_err: None,
            want: &[],
        },
    ];

    for case in cases {
        let ctx = TestContext::new(1);
        let mut router: Router<TestContext, Vec<String>> = Router::new();
        for route in case.routes {
            router.add(route, variadic(echo_args));
        }

        let handler = match (router.match_route(case.path), case.want_match_err) {
            (Err(err), Some(want)) => {
                assert_eq!(err.to_string(), want, "case {}", case.name);
                continue;
            }
            (Ok(handler), None) => handler,
            (res, _) => panic!("case {}: unexpected match result {res:?}", case.name),
        };

        let result = handler.call(&ctx).unwrap();
        assert_eq!(result, strings(case.want), "case {}", case.name);
    }
}

#[test]
fn test_end_to_end_typed_handler() {
    let mut router: Router<TestContext, String> = Router::new();
    router.add(
        "repos/{owner}/{repo}/issues",
        |_: &TestContext, owner: String, repo: String| -> Result<String, reitti::BoxError> {
            Ok(format!("owner={owner}, repo={repo}"))
        },
    );

    let handler = router.match_route("repos/wolverian/reitti/issues").unwrap();
    let result = handler.call(&TestContext::new(7)).unwrap();
    assert_eq!(result, "owner=wolverian, repo=reitti");

    let err = router.match_route("foobar").unwrap_err();
    assert_eq!(err.to_string(), r#"no handler found for route: "foobar""#);
    assert_eq!(err.name(), "foobar");
}

#[test]
fn test_registration_order_decides() {
    let mut router: Router<TestContext, &'static str> = Router::new();
    router
        .add("a/{x}", |_: &TestContext, _x: String| -> Result<&'static str, reitti::BoxError> {
            Ok("x")
        })
        .add("a/{y}", |_: &TestContext, _y: String| -> Result<&'static str, reitti::BoxError> {
            Ok("y")
        });

    let ctx = TestContext::new(1);
    assert_eq!(router.match_route("a/1").unwrap().call(&ctx).unwrap(), "x");
    assert_eq!(router.dispatch("a/2", &ctx).unwrap(), "x");
}

#[test]
fn test_literal_case_sensitivity() {
    let mut router: Router<TestContext, Vec<String>> = Router::new();
    router.add("repos/{owner}", variadic(echo_args));

    assert!(router.match_route("Repos/wolverian").is_err());
    assert!(router.match_route("repos/wolverian").is_ok());
}

#[test]
fn test_segment_count_mismatch_never_matches() {
    let mut router: Router<TestContext, Vec<String>> = Router::new();
    router.add("{a}/{b}", variadic(echo_args));

    for name in ["", "x", "x/y/z", "/x/y", "x/y/"] {
        assert_eq!(
            router.match_route(name).unwrap_err(),
            MatchError::NoRoute(name.to_string()),
            "name {name:?}"
        );
    }
    assert!(router.match_route("x/").is_ok());
}

#[test]
fn test_capture_count_equals_parameter_count() {
    let mut router: Router<TestContext, Vec<String>> = Router::new();
    router.add("v1/{a}/static/{b}/{c}/end", variadic(echo_args));

    let matched = router.match_route("v1/1/static/2/3/end").unwrap();
    assert_eq!(matched.params(), strings(&["1", "2", "3"]).as_slice());
    assert_eq!(matched.template().param_count(), matched.params().len());
}

#[test]
fn test_match_is_idempotent() {
    let mut router: Router<TestContext, Vec<String>> = Router::new();
    router
        .add("repos/{owner}", variadic(echo_args))
        .add("repos/{owner}/{repo}", variadic(echo_args))
        .add("repos/{a}/{b}", variadic(echo_args));

    let first = router.match_route("repos/wolverian/reitti").unwrap();
    let second = router.match_route("repos/wolverian/reitti").unwrap();
    assert_eq!(first.index(), 1);
    assert_eq!(first.index(), second.index());
    assert_eq!(first.params(), second.params());

    let ctx = TestContext::new(1);
    assert_eq!(first.call(&ctx).unwrap(), second.call(&ctx).unwrap());
    // A bound invocation can be called again.
    assert_eq!(first.call(&ctx).unwrap(), strings(&["wolverian", "reitti"]));
}

#[test]
fn test_dispatch_reports_both_error_kinds() {
    let mut router: Router<TestContext, String> = Router::new();
    router.add(
        "repos/{owner}/{repo}",
        |_: &TestContext, a: String, b: String, c: String| -> Result<String, reitti::BoxError> {
            Ok(format!("{a}{b}{c}"))
        },
    );

    let ctx = TestContext::new(1);
    match router.dispatch("nope", &ctx) {
        Err(ReittiError::Match(MatchError::NoRoute(name))) => assert_eq!(name, "nope"),
        other => panic!("expected no route, got {other:?}"),
    }

    let err = router.dispatch("repos/wolverian/reitti", &ctx).unwrap_err();
    assert!(matches!(err, ReittiError::Handler(ref e) if e.is_argument_count()));
    assert_eq!(err.to_string(), "expected 3 args, got 2");
}

#[test]
fn test_empty_parameter_segments() {
    let mut router: Router<TestContext, Vec<String>> = Router::new();
    router
        .add("{}/x", variadic(echo_args))
        .add("a/{p}/{q}", variadic(echo_args));

    let ctx = TestContext::new(1);
    assert_eq!(router.dispatch("/x", &ctx).unwrap(), strings(&[""]));
    assert_eq!(router.dispatch("a//", &ctx).unwrap(), strings(&["", ""]));
}

#[test]
fn test_twelve_parameter_handler() {
    let mut router: Router<TestContext, String> = Router::new();
    router.add(
        "{a}/{b}/{c}/{d}/{e}/{f}/{g}/{h}/{i}/{j}/{k}/{l}",
        |_: &TestContext,
         a: String,
         b: String,
         c: String,
         d: String,
         e: String,
         f: String,
         g: String,
         h: String,
         i: String,
         j: String,
         k: String,
         l: String|
         -> Result<String, reitti::BoxError> {
            Ok([a, b, c, d, e, f, g, h, i, j, k, l].concat())
        },
    );

    let result = router
        .dispatch("1/2/3/4/5/6/7/8/9/10/11/12", &TestContext::new(1))
        .unwrap();
    assert_eq!(result, "123456789101112");
}
