// src/tests/router_tests/premium_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_json, get, RecordsOutcome, TestApp};
use serde_json::{json, Map};

#[test]
fn blank_mls_id_is_rejected() {
    let (state, _) = TestApp::default().build();

    for uri in ["/api/premium", "/api/premium?mlsId=", "/api/premium?mlsId=%20%20"] {
        let resp = handle(get(uri), &state).unwrap();
        assert_eq!(resp.status(), 400, "{uri}");
        assert_eq!(body_json(resp), json!({ "ok": false, "error": "Missing mlsId" }));
    }
}

#[test]
fn missing_credentials_is_server_error() {
    let (state, _) = TestApp::default().build();

    let resp = handle(get("/api/premium?mlsId=2001234"), &state).unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(
        body_json(resp),
        json!({ "ok": false, "error": "Missing Airtable env vars" })
    );
}

#[test]
fn found_record_returns_fields() {
    let mut fields = Map::new();
    fields.insert("MLS ID".into(), json!("2001234"));
    fields.insert("Headline".into(), json!("Waterfront estate"));

    let (state, _) = TestApp {
        records: RecordsOutcome::Found(fields),
        ..TestApp::default()
    }
    .build();

    let resp = handle(get("/api/premium?mlsId=2001234"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        body_json(resp),
        json!({
            "ok": true,
            "found": true,
            "fields": { "MLS ID": "2001234", "Headline": "Waterfront estate" }
        })
    );
}

#[test]
fn no_match_is_ok_and_empty() {
    let (state, _) = TestApp {
        records: RecordsOutcome::Missing,
        ..TestApp::default()
    }
    .build();

    let json = body_json(handle(get("/api/premium?mlsId=nope"), &state).unwrap());
    assert_eq!(json, json!({ "ok": true, "found": false, "fields": {} }));
}

#[test]
fn upstream_error_text_is_passed_through() {
    let (state, _) = TestApp {
        records: RecordsOutcome::Upstream(r#"{"error":"NOT_AUTHORIZED"}"#.into()),
        ..TestApp::default()
    }
    .build();

    let resp = handle(get("/api/premium?mlsId=1"), &state).unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(body_json(resp)["error"], r#"{"error":"NOT_AUTHORIZED"}"#);
}
