// src/tests/router_tests/embed_tests.rs
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, post, TestApp};
use serde_json::json;

fn handoff(origin: &str, data: serde_json::Value) -> String {
    json!({ "origin": origin, "data": data }).to_string()
}

#[test]
fn trusted_parent_listing_is_rendered() {
    let (state, probes) = TestApp::default().build();
    let body = handoff(
        "https://www.onefloridagroup.com",
        json!({
            "type": "OFG_LISTING",
            "listing": {
                "property": {
                    "price": 1_100_000,
                    "address": { "full": "77 Atlantic Blvd" },
                    "media": { "photos": [{ "large": "https://img/a.jpg" }] }
                }
            }
        }),
    );

    let resp = handle(post("/embed", "application/json", body), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert!(html.starts_with(r#"<div id="listing-root""#));
    assert!(html.contains("$1,100,000"));
    assert!(html.contains("77 Atlantic Blvd"));
    assert!(html.contains("https://img/a.jpg"));
    assert_eq!(probes.searches(), 0);
}

#[test]
fn untrusted_origin_is_ignored() {
    let (state, _) = TestApp::default().build();
    let body = handoff(
        "https://attacker.example",
        json!({ "type": "OFG_LISTING", "listing": { "price": 1 } }),
    );

    let resp = handle(post("/embed", "application/json", body), &state).unwrap();
    assert_eq!(resp.status(), 204);
}

#[test]
fn other_message_types_are_ignored() {
    let (state, _) = TestApp::default().build();
    let body = handoff("https://onefloridagroup.com", json!({ "type": "RESIZE", "height": 900 }));

    let resp = handle(post("/embed", "application/json", body), &state).unwrap();
    assert_eq!(resp.status(), 204);
}

#[test]
fn malformed_handoff_is_bad_request() {
    let (state, _) = TestApp::default().build();
    let resp = respond(post("/embed", "application/json", "{not json"), &state);
    assert_eq!(resp.status(), 400);
}
