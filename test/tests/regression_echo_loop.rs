/// REGRESSION TEST: host push bouncing between host and app
///
/// A router that notifies listeners after `replace` returned sees the echo
/// guard already released, so the host's own route comes back to the
/// reconciler as an internal navigation and is sent to the host. The host
/// then pushes it again. Without origin tags that push was applied once
/// more and the cycle repeated.
///
/// The tag issued with the outbound message makes the second push an echo.

use dcs_shared::CountTable;
use dcs_test::{interactive, pushed, TestHarness};

#[test]
fn deferred_router_does_not_loop() {
    let mut harness = TestHarness::builder().deferred_router().build();

    harness.push(pushed(interactive("docs_intro", "m1", Some("t2")), vec![]));
    assert_eq!(harness.router.replaced().len(), 1);
    assert!(harness.channel.set_routes().is_empty());

    // the router notifies late, outside the guard
    harness.router.flush();
    harness.run();
    let set_routes = harness.channel.set_routes();
    assert_eq!(set_routes.len(), 1);
    assert_eq!(set_routes[0].route, interactive("docs_intro", "m1", Some("t2")));

    harness.channel.echo_last_route(CountTable::default());
    harness.run();
    harness.router.flush();
    harness.run();

    assert_eq!(harness.router.replaced().len(), 1);
    assert_eq!(harness.channel.set_routes().len(), 1);
    assert!(harness.router.failures().is_empty());
}

#[test]
fn synchronous_router_never_sends_host_route_back() {
    let mut harness = TestHarness::new();

    harness.push(pushed(interactive("docs_intro", "m1", Some("t2")), vec![]));
    harness.push(pushed(interactive("docs_setup", "m1", None), vec![]));

    assert_eq!(harness.router.replaced().len(), 2);
    assert!(harness.channel.sent().is_empty());
}

#[test]
fn app_navigation_is_not_replayed_into_router() {
    let mut harness = TestHarness::new();

    harness
        .router
        .navigate("/docs/intro?dcs-layout=2&dcs-interact-mode=m1")
        .unwrap();
    harness.run();
    harness.channel.echo_last_route(CountTable::default());
    harness.run();

    assert!(harness.router.replaced().is_empty());
    assert_eq!(harness.channel.set_routes().len(), 1);
}
