use crate::errors::ServerError;
use crate::handlers;
use crate::responses::{crash_response, html_error_response, ResultResp};
use crate::state::AppState;
use crate::templates::components::section::panic_message;
use astra::{Body, Request, Response, ResponseBuilder};
use std::collections::HashMap;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => handlers::listing::show(&req, state),
        ("POST", "/embed") => handlers::listing::embed(&mut req, state),
        ("GET", "/mortgage") => handlers::mortgage::panel(&req),
        ("GET", "/api/mortgage") => handlers::mortgage::api(&req),
        ("GET", "/api/premium") => handlers::premium::lookup(&req, state),
        ("POST", "/tour") => handlers::tour::submit(&mut req, state),
        ("GET", "/healthz") => ResponseBuilder::new()
            .status(200)
            .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
            .body(Body::from("ok"))
            .map_err(|_| ServerError::InternalError),
        _ => Err(ServerError::NotFound),
    }
}

/// Entry point for the server loop: never fails, never unwinds.
/// Errors become error pages and a panic anywhere below becomes the crash page.
pub fn respond(req: Request, state: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let resp = match panic::catch_unwind(AssertUnwindSafe(|| handle(req, state))) {
        Ok(Ok(resp)) => resp,
        Ok(Err(err)) => {
            if err.status() >= 500 {
                tracing::error!(%method, %path, error = %err, "request failed");
            } else {
                tracing::debug!(%method, %path, error = %err, "request rejected");
            }
            html_error_response(err)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(%method, %path, panic = %message, "render crash");
            crash_response(&message)
        }
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Reads at most `limit` bytes of the request body.
pub fn read_body(req: &mut Request, limit: usize) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable body: {e}")))?;

    if buf.len() > limit {
        return Err(ServerError::BadRequest("Request body too large".into()));
    }
    Ok(buf)
}

pub fn parse_form(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}
