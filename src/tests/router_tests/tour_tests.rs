// src/tests/router_tests/tour_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, post, TestApp};

const FORM: &str = "application/x-www-form-urlencoded";

#[test]
fn valid_request_is_delivered() {
    let (state, probes) = TestApp::default().build();
    let body = "name=Ana+Lopez&phone=904-555-0101&email=ana%40example.com&message=&listing_id=DEMO&listing_address=1234+Ocean+Boulevard&listing_price=2850000&page_url=%2F";

    let resp = handle(post("/tour", FORM, body), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Request Sent!"));

    let delivered = probes.tours.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Ana Lopez");
    assert_eq!(delivered[0].email, "ana@example.com");
    assert_eq!(delivered[0].listing_id, "DEMO");
}

#[test]
fn invalid_email_rerenders_form() {
    let (state, probes) = TestApp::default().build();

    let resp = handle(post("/tour", FORM, "name=Ana&phone=1&email=ana-at-example"), &state).unwrap();
    let html = body_string(resp);

    assert!(html.contains("Please enter a valid email"));
    assert!(html.contains(r#"value="ana-at-example""#));
    assert!(probes.tours.lock().unwrap().is_empty());
}

#[test]
fn webhook_failure_still_confirms() {
    let (state, _) = TestApp {
        tours_fail: true,
        ..TestApp::default()
    }
    .build();

    let resp = handle(post("/tour", FORM, "name=Ana&phone=1&email=ana%40example.com"), &state).unwrap();
    assert!(body_string(resp).contains("Request Sent!"));
}
