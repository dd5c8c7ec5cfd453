// handlers/tour.rs
use crate::domain::TourForm;
use crate::responses::{html_response, ResultResp};
use crate::router::{parse_form, read_body};
use crate::state::AppState;
use crate::templates::components::schedule::{tour_form, tour_success};
use astra::Request;
use chrono::Utc;
use std::collections::HashMap;

const TOUR_BODY_LIMIT: usize = 16 * 1024;

/// `POST /tour`: a schedule-a-tour submission.
///
/// Invalid input re-renders the form with messages. A webhook failure is
/// logged but the visitor still sees the confirmation.
pub fn submit(req: &mut Request, state: &AppState) -> ResultResp {
    let body = read_body(req, TOUR_BODY_LIMIT)?;
    let form = form_from_fields(parse_form(&body));

    let request = match form.clone().into_request(Utc::now()) {
        Ok(request) => request,
        Err(errors) => return html_response(tour_form(&form, &errors)),
    };

    if let Err(e) = state.tours.deliver(&request) {
        tracing::warn!(listing_id = %request.listing_id, error = %e, "tour request not delivered");
    }

    html_response(tour_success())
}

fn form_from_fields(mut fields: HashMap<String, String>) -> TourForm {
    let mut take = |key: &str| fields.remove(key).unwrap_or_default();

    TourForm {
        name: take("name"),
        phone: take("phone"),
        email: take("email"),
        message: take("message"),
        listing_id: take("listing_id"),
        listing_address: take("listing_address"),
        listing_price: take("listing_price"),
        page_url: take("page_url"),
    }
}
