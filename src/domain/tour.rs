// src/domain/tour.rs

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Fields as submitted by the schedule-a-tour form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub listing_id: String,
    pub listing_address: String,
    pub listing_price: String,
    pub page_url: String,
}

/// Per-field validation messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourFormErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl TourFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

/// A validated tour request, in the shape sent to the lead webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub listing_id: String,
    pub listing_address: String,
    pub listing_price: String,
    pub page_url: String,
    pub created_at: String,
}

impl TourForm {
    pub fn validate(&self) -> TourFormErrors {
        let mut errors = TourFormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required");
        }
        if self.phone.trim().is_empty() {
            errors.phone = Some("Phone is required");
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required");
        } else if !looks_like_email(self.email.trim()) {
            errors.email = Some("Please enter a valid email");
        }

        errors
    }

    /// Validates and stamps the request with `now`.
    pub fn into_request(self, now: DateTime<Utc>) -> Result<TourRequest, TourFormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TourRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message,
            listing_id: self.listing_id,
            listing_address: self.listing_address,
            listing_price: self.listing_price,
            page_url: self.page_url,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

/// `local@domain.tld`, no whitespace, exactly one `@`.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
