// handlers/mortgage.rs
use crate::domain::coerce::parse_numeric_text;
use crate::domain::{compute_mortgage, MortgageInputs, MortgageResult};
use crate::responses::{html_response, json_response, ResultResp};
use crate::router::parse_query;
use crate::templates::components::mortgage::mortgage_calculator;
use astra::Request;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MortgageResponse {
    home_price: f64,
    down_payment_pct: f64,
    annual_rate_pct: f64,
    term_years: u32,
    #[serde(flatten)]
    result: MortgageResult,
}

/// `GET /mortgage`: the calculator panel for the submitted inputs.
pub fn panel(req: &Request) -> ResultResp {
    let inputs = inputs_from_query(&parse_query(req));
    html_response(mortgage_calculator(inputs))
}

/// `GET /api/mortgage`: the same numbers as JSON.
pub fn api(req: &Request) -> ResultResp {
    let inputs = inputs_from_query(&parse_query(req)).sanitized();
    let result = compute_mortgage(inputs);

    json_response(
        200,
        &MortgageResponse {
            home_price: inputs.home_price,
            down_payment_pct: inputs.down_payment_pct,
            annual_rate_pct: inputs.annual_rate_pct,
            term_years: inputs.term_years,
            result,
        },
    )
}

/// Missing or unreadable values keep their defaults.
pub fn inputs_from_query(query: &HashMap<String, String>) -> MortgageInputs {
    let defaults = MortgageInputs::default();
    let number = |key: &str| query.get(key).and_then(|v| parse_numeric_text(v));

    MortgageInputs {
        home_price: number("price").unwrap_or(defaults.home_price),
        down_payment_pct: number("down").unwrap_or(defaults.down_payment_pct),
        annual_rate_pct: number("rate").unwrap_or(defaults.annual_rate_pct),
        term_years: number("term")
            .map(|t| t.round() as u32)
            .unwrap_or(defaults.term_years),
    }
}
