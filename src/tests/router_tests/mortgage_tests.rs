// src/tests/router_tests/mortgage_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_json, body_string, get, TestApp};

#[test]
fn api_returns_payment_breakdown() {
    let (state, _) = TestApp::default().build();

    let resp = handle(get("/api/mortgage?price=500000&down=20&rate=7&term=30"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let json = body_json(resp);
    assert_eq!(json["loanAmount"], 400000.0);
    assert_eq!(json["termYears"], 30);
    let monthly = json["monthlyPrincipalInterest"].as_f64().unwrap();
    assert!((monthly - 2661.21).abs() < 0.01);
    assert!(json["totalInterest"].as_f64().unwrap() > 0.0);
}

#[test]
fn zero_rate_stays_finite() {
    let (state, _) = TestApp::default().build();

    let json = body_json(handle(get("/api/mortgage?price=360000&down=0&rate=0&term=30"), &state).unwrap());
    assert_eq!(json["monthlyPrincipalInterest"], 1000.0);
}

#[test]
fn panel_renders_for_htmx() {
    let (state, _) = TestApp::default().build();

    let html = body_string(handle(get("/mortgage?price=2850000&down=20&rate=7&term=15"), &state).unwrap());
    assert!(html.starts_with(r#"<section id="mortgage-panel""#));
    assert!(html.contains(r#"<option value="15" selected>"#));
}

#[test]
fn out_of_range_inputs_still_give_numbers() {
    let (state, _) = TestApp::default().build();
    let huge_price = format!("1{}", "0".repeat(308));

    for uri in [
        "/api/mortgage?price=500000&down=20&rate=1000000&term=30".to_string(),
        format!("/api/mortgage?price={huge_price}&down=20&rate=7&term=30"),
    ] {
        let json = body_json(handle(get(&uri), &state).unwrap());
        for key in ["monthlyPrincipalInterest", "totalPayment", "totalInterest", "estimatedTotalMonthly"] {
            assert!(json[key].is_f64(), "{key} not a number for {uri}");
        }
    }
}
