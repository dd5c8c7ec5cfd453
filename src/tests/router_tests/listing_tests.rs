// src/tests/router_tests/listing_tests.rs
use crate::config::Config;
use crate::domain::demo::DEMO_ADDRESS;
use crate::domain::PLACEHOLDER_PHOTOS;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, get, TestApp};
use http::HeaderValue;
use serde_json::json;

#[test]
fn no_id_shows_demo_without_searching() {
    let (state, probes) = TestApp::default().build();

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(DEMO_ADDRESS));
    assert!(body.contains("$2,850,000"));
    for photo in PLACEHOLDER_PHOTOS {
        assert!(body.contains(&photo.replace('&', "&amp;")), "missing {photo}");
    }
    assert_eq!(probes.searches(), 0);
}

#[test]
fn embedded_page_waits_for_parent() {
    let (state, probes) = TestApp::default().build();

    let resp = handle(get("/?id=2001234&embed=1"), &state).unwrap();
    assert!(body_string(resp).contains(DEMO_ADDRESS));

    let mut framed = get("/?id=2001234");
    framed
        .headers_mut()
        .insert("sec-fetch-dest", HeaderValue::from_static("iframe"));
    let resp = handle(framed, &state).unwrap();
    assert!(body_string(resp).contains(DEMO_ADDRESS));

    assert_eq!(probes.searches(), 0);
}

#[test]
fn id_fetches_and_normalizes_listing() {
    let (state, probes) = TestApp {
        search: Ok(json!({
            "id": "2001234",
            "listPrice": "$725,000",
            "unparsedAddress": "48 Marsh Landing Pkwy, Ponte Vedra, FL",
            "beds": 4,
            "baths": { "full": 3, "half": 1 },
            "livingArea": "2,950",
            "photos": [{ "url": "https://img/1.jpg" }, { "url": "https://img/2.jpg" }]
        })),
        ..TestApp::default()
    }
    .build();

    let resp = handle(get("/?id=2001234"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("$725,000"));
    assert!(body.contains("48 Marsh Landing Pkwy, Ponte Vedra, FL"));
    assert!(body.contains("3.5"));
    assert!(body.contains("2,950"));
    assert!(body.contains("https://img/2.jpg"));
    assert!(!body.contains(DEMO_ADDRESS));
    // No coordinates in the payload and geocoding is off: no map.
    assert!(!body.contains(r#"id="location""#));
    assert_eq!(probes.searches(), 1);
    assert_eq!(probes.geocodes(), 0);
}

#[test]
fn fetch_failure_shows_unable_to_load() {
    let (state, _) = TestApp::default().build();

    let resp = respond(get("/?id=missing"), &state);
    assert_eq!(resp.status(), 502);

    let body = body_string(resp);
    assert!(body.contains("Unable to Load"));
    assert!(body.contains("Failed to fetch listing"));
    assert!(body.contains("Try Again"));
}

#[test]
fn geocoding_fills_in_missing_coordinates_when_enabled() {
    let config = Config {
        geocode_missing_coordinates: true,
        ..Config::default()
    };
    let (state, probes) = TestApp {
        config,
        search: Ok(json!({ "unparsedAddress": "1 Riverside Ave, Jacksonville, FL" })),
        ..TestApp::default()
    }
    .build();

    let body = body_string(handle(get("/?id=9"), &state).unwrap());

    assert!(body.contains(r#"id="location""#));
    assert!(body.contains("marker=30.33,-81.65"));
    assert_eq!(probes.geocodes(), 1);
}

#[test]
fn unknown_route_is_not_found() {
    let (state, _) = TestApp::default().build();
    assert_eq!(respond(get("/nope"), &state).status(), 404);
}

#[test]
fn health_check() {
    let (state, _) = TestApp::default().build();
    let resp = handle(get("/healthz"), &state).unwrap();
    assert_eq!(body_string(resp), "ok");
}
