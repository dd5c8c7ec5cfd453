use crate::errors::ServerError;
use crate::templates::pages::{crash_page, error_page, unable_to_load_page};
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    match &err {
        ServerError::Upstream(msg) => render(status, unable_to_load_page(msg)),
        ServerError::NotFound => render(status, error_page(status, "Not Found")),
        other => render(status, error_page(status, &other.to_string())),
    }
}

/// Last-resort page when rendering itself blew up.
pub fn crash_response(message: &str) -> Response {
    render(500, crash_page(message))
}

fn render(status: u16, markup: Markup) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
