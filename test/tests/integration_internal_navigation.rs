/// Integration tests for navigation started inside the embedded app.
///
/// Every change of the internal router is validated, resolved to a page and
/// forwarded to the host as a REPLACE carrying a fresh origin tag.

use dcs_client::ConfigurationError;
use dcs_shared::{
    ClientContext, ClientMessage, Layout, NavigationMode, OriginTag, Redirect, ValidationError,
};
use dcs_test::{full_client, full_host, interactive, pushed, read_only, TestHarness};

#[test]
fn initial_location_is_not_sent() {
    let mut harness = TestHarness::builder().at("/docs/intro?dcs-layout=3").build();
    harness.run();

    assert!(harness.channel.sent().is_empty());
    assert_eq!(harness.router.listener_count(), 1);
    assert_eq!(harness.channel.subscriber_count(), 1);
}

#[test]
fn navigation_is_sent_as_replace_with_origin_tag() {
    let mut harness = TestHarness::new();

    harness.router.navigate("/docs/setup").unwrap();
    harness.run();

    let set_routes = harness.channel.set_routes();
    assert_eq!(set_routes.len(), 1);
    assert_eq!(set_routes[0].route, full_client("docs_setup"));
    assert_eq!(set_routes[0].mode, NavigationMode::Replace);
    assert_eq!(
        set_routes[0].client_context,
        Some(ClientContext::self_originated(OriginTag::new(1)))
    );
}

#[test]
fn every_navigation_gets_its_own_tag() {
    let mut harness = TestHarness::new();

    harness.router.navigate("/docs/setup").unwrap();
    harness.router.navigate("/docs/intro").unwrap();
    harness.run();

    let origins: Vec<_> = harness
        .channel
        .set_routes()
        .into_iter()
        .filter_map(|set_route| set_route.client_context?.origin)
        .collect();
    assert_eq!(origins, vec![OriginTag::new(1), OriginTag::new(2)]);
}

#[test]
fn query_fields_are_carried_over() {
    let mut harness = TestHarness::new();

    harness
        .router
        .navigate("/docs/intro?dcs-layout=2&dcs-interact-mode=m1&dcs-trigger-id=t3&utm=x")
        .unwrap();
    harness.run();

    assert_eq!(
        harness.channel.set_routes()[0].route,
        interactive("docs_intro", "m1", Some("t3"))
    );
}

#[test]
fn unknown_pathname_gets_a_new_page_name() {
    let mut harness = TestHarness::new();

    harness.router.navigate("/guide/new-page").unwrap();
    harness.run();

    assert_eq!(
        harness.channel.set_routes()[0].route,
        full_client("guide_new-page")
    );
    assert_eq!(
        harness
            .resolver
            .table()
            .get_pathname(&"guide_new-page".into())
            .as_deref(),
        Some("/guide/new-page")
    );
}

#[test]
fn full_host_route_skips_page_resolution() {
    let mut harness = TestHarness::new();

    harness
        .router
        .navigate("/anywhere?dcs-layout=1&dcs-pathname=%2Ft%2Fsome-topic%2F3")
        .unwrap();
    harness.run();

    assert_eq!(
        harness.channel.set_routes()[0].route,
        full_host("/t/some-topic/3")
    );
    assert_eq!(harness.resolver.lookups(), 0);
}

#[test]
fn trigger_without_interactive_layout_fails_navigation() {
    let mut harness = TestHarness::new();

    let result = harness.router.navigate("/docs/intro?dcs-trigger-id=t1");
    harness.run();

    assert_eq!(
        result,
        Err(ValidationError::TriggerWithoutInteraction {
            layout: Layout::FullClient
        })
    );
    assert!(harness.channel.sent().is_empty());
}

#[test]
fn invalid_layout_fails_navigation() {
    let mut harness = TestHarness::new();

    let result = harness.router.navigate("/docs/intro?dcs-layout=abc");
    harness.run();

    assert!(matches!(result, Err(ValidationError::InvalidLayout { .. })));
    assert!(harness.channel.sent().is_empty());
}

#[test]
fn navigating_away_forgets_pushed_data() {
    let mut harness = TestHarness::new();
    harness.push(pushed(read_only("docs_intro"), vec![]));
    assert!(harness.context.pushed_data().is_some());

    harness.router.navigate("/docs/setup").unwrap();
    harness.run();

    assert!(harness.context.pushed_data().is_none());
}

#[test]
fn standalone_app_sends_nothing() {
    let mut harness = TestHarness::builder().standalone().build();

    harness.router.navigate("/docs/setup").unwrap();
    harness.run();

    assert!(harness.channel.sent().is_empty());
    assert_eq!(harness.channel.subscriber_count(), 0);
    assert_eq!(harness.router.listener_count(), 1);
}

#[test]
fn redirects_are_forwarded_when_embedded() {
    let harness = TestHarness::new();
    let redirect = Redirect {
        src: full_client("old_intro"),
        dest: full_client("docs_intro"),
    };

    harness.context.set_redirects(vec![redirect.clone()]).unwrap();

    assert_eq!(
        harness.channel.sent(),
        vec![ClientMessage::SetRedirects(vec![redirect])]
    );
}

#[test]
fn redirects_are_dropped_when_standalone() {
    let harness = TestHarness::builder().standalone().build();

    let result = harness.context.set_redirects(vec![Redirect {
        src: full_client("a"),
        dest: full_client("b"),
    }]);

    assert_eq!(result, Ok(()));
    assert!(harness.channel.sent().is_empty());
}

#[test]
fn redirects_need_router_sync() {
    let harness = TestHarness::builder().unstarted().build();

    let result = harness.context.set_redirects(Vec::new());

    assert_eq!(result, Err(ConfigurationError::NotInitialized));
}
