/// Integration tests for routes pushed by the host.
///
/// The host is the routing authority: a push is stored, announced to every
/// annotated component, and then applied to the internal router unless it
/// echoes the app's own navigation.

use dcs_client::{Annotations, SyncError};
use dcs_shared::{
    ClientContext, CountRecord, CountTable, NotFoundError, OriginTag, PageName, RouteProps,
};
use dcs_test::{
    full_client, full_host, interactive, pushed, read_only, TestComponent, TestHarness, TestProps,
};

#[test]
fn docs_intro_scenario() {
    let mut harness = TestHarness::new();
    let annotator = harness.annotator(None);
    let trigger = annotator.create(TestComponent::visible(), TestProps::trigger("t7"));
    trigger.mount();

    harness.push(pushed(
        interactive("docs_intro", "m1", Some("t7")),
        vec![CountRecord::trigger("docs_intro", "t7", 3)],
    ));

    assert_eq!(
        harness.router.replaced(),
        vec!["/docs/intro?dcs-layout=2&dcs-interact-mode=m1&dcs-trigger-id=t7".to_owned()]
    );
    assert!(harness.channel.set_routes().is_empty());
    assert_eq!(
        trigger.annotations(),
        Annotations {
            dcs_count: Some(3),
            dcs_selected: true
        }
    );
    assert!(harness.router.failures().is_empty());
}

#[test]
fn replace_is_skipped_when_router_is_already_there() {
    let mut harness = TestHarness::builder().at("/docs/intro?dcs-layout=3").build();

    harness.push(pushed(read_only("docs_intro"), vec![]));

    assert!(harness.router.replaced().is_empty());
    assert!(harness.channel.sent().is_empty());
}

#[test]
fn full_client_push_replaces_with_bare_pathname() {
    let mut harness = TestHarness::builder().at("/docs/intro?dcs-layout=3").build();

    harness.push(pushed(full_client("docs_setup"), vec![]));

    assert_eq!(harness.router.replaced(), vec!["/docs/setup".to_owned()]);
}

#[test]
fn missing_page_reports_error_to_host() {
    let mut harness = TestHarness::new();

    harness.push(pushed(read_only("nope"), vec![]));

    assert!(harness.router.replaced().is_empty());
    assert_eq!(
        harness.channel.route_props(),
        vec![RouteProps::error("Cannot find pathname for page \"nope\"")]
    );
    assert_eq!(
        harness.context.take_errors(),
        vec![SyncError::NotFound(NotFoundError::new(PageName::from("nope")))]
    );
    assert!(harness.context.take_errors().is_empty());
}

#[test]
fn full_host_push_leaves_router_alone() {
    let mut harness = TestHarness::new();
    let annotator = harness.annotator(Some("/docs/intro"));
    let component = annotator.create(TestComponent::visible(), TestProps::default());
    component.mount();

    harness.push(pushed(
        full_host("/t/topic/12"),
        vec![CountRecord::page("docs_intro", 4)],
    ));

    assert!(harness.router.replaced().is_empty());
    assert_eq!(
        harness.context.pushed_data().map(|data| data.route.clone()),
        Some(full_host("/t/topic/12"))
    );
    assert_eq!(component.dcs_count(), Some(4));
}

#[test]
fn own_echo_updates_components_but_not_router() {
    let mut harness = TestHarness::new();
    let annotator = harness.annotator(None);
    let component = annotator.create(TestComponent::visible(), TestProps::default());
    component.mount();

    harness.router.navigate("/docs/setup").unwrap();
    harness.run();
    harness
        .channel
        .echo_last_route(CountTable::new(vec![CountRecord::page("docs_setup", 2)]));
    harness.run();

    assert!(harness.router.replaced().is_empty());
    assert_eq!(component.dcs_count(), Some(2));
}

#[test]
fn foreign_origin_tag_is_applied() {
    let mut harness = TestHarness::new();

    harness.push(
        pushed(read_only("docs_setup"), vec![])
            .with_client_context(ClientContext::self_originated(OriginTag::new(99))),
    );

    assert_eq!(
        harness.router.replaced(),
        vec!["/docs/setup?dcs-layout=3".to_owned()]
    );
}

#[test]
fn untagged_self_originated_marker_is_trusted() {
    let mut harness = TestHarness::new();

    harness.push(pushed(read_only("docs_setup"), vec![]).with_client_context(ClientContext {
        self_originated: true,
        origin: None,
    }));

    assert!(harness.router.replaced().is_empty());
}

#[test]
fn pushed_data_keeps_description_and_counts() {
    let mut harness = TestHarness::new();
    let counts = vec![
        CountRecord::page("docs_intro", 1),
        CountRecord::trigger("docs_intro", "t1", 1),
    ];

    harness.push(pushed(read_only("docs_intro"), counts.clone()).with_descr("Introduction"));

    let data = harness.context.pushed_data().unwrap();
    assert_eq!(data.descr.as_deref(), Some("Introduction"));
    assert_eq!(data.counts, CountTable::new(counts));
}

#[test]
fn slow_page_lookup_still_replaces() {
    let mut harness = TestHarness::new();
    harness.resolver.hold();

    harness.push(pushed(read_only("docs_setup"), vec![]));
    assert!(harness.router.replaced().is_empty());
    assert_eq!(harness.resolver.waiting(), 1);

    harness.resolver.release();
    harness.run();

    assert_eq!(
        harness.router.replaced(),
        vec!["/docs/setup?dcs-layout=3".to_owned()]
    );
}
