pub mod errors;
pub mod html;
pub mod json;

pub use errors::{crash_response, html_error_response};
pub use html::{html_response, no_content};
pub use json::json_response;

pub use crate::errors::ResultResp;
