// handlers/premium.rs
use crate::clients::ClientError;
use crate::responses::{json_response, ResultResp};
use crate::router::parse_query;
use crate::state::AppState;
use astra::Request;
use serde_json::json;

/// `GET /api/premium?mlsId=`: proxies a premium-record lookup.
///
/// Always answers with JSON: `{ok, found, fields}` on success,
/// `{ok: false, error}` with 400 or 500 otherwise.
pub fn lookup(req: &Request, state: &AppState) -> ResultResp {
    let query = parse_query(req);
    let mls_id = query.get("mlsId").map(|s| s.trim()).unwrap_or_default();

    if mls_id.is_empty() {
        return json_response(400, &json!({ "ok": false, "error": "Missing mlsId" }));
    }

    match state.records.find_by_mls_id(mls_id) {
        Ok(record) => json_response(
            200,
            &json!({
                "ok": true,
                "found": record.is_some(),
                "fields": record.unwrap_or_default(),
            }),
        ),
        Err(err) => {
            match &err {
                ClientError::Config(_) => tracing::error!(error = %err, "records lookup not configured"),
                _ => tracing::warn!(mls_id, error = %err, "records lookup failed"),
            }
            json_response(500, &json!({ "ok": false, "error": err.to_string() }))
        }
    }
}
