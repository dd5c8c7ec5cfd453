// src/tests/utils.rs
use crate::clients::{ClientError, Geocode, ListingSearch, RecordLookup, TourSink};
use crate::config::Config;
use crate::domain::{RawListing, TourRequest};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{Map, Value};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Canned listing search: a payload, or the error message to fail with.
pub struct FakeSearch {
    pub outcome: Result<Value, String>,
    pub calls: Arc<AtomicUsize>,
}

impl ListingSearch for FakeSearch {
    fn find_by_id(&self, _id: &str) -> Result<RawListing, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(value) => Ok(RawListing::new(value.clone())),
            Err(msg) => Err(ClientError::Status(msg.clone())),
        }
    }
}

pub enum RecordsOutcome {
    Found(Map<String, Value>),
    Missing,
    Unconfigured,
    Upstream(String),
}

pub struct FakeRecords {
    pub outcome: RecordsOutcome,
}

impl RecordLookup for FakeRecords {
    fn find_by_mls_id(&self, _mls_id: &str) -> Result<Option<Map<String, Value>>, ClientError> {
        match &self.outcome {
            RecordsOutcome::Found(fields) => Ok(Some(fields.clone())),
            RecordsOutcome::Missing => Ok(None),
            RecordsOutcome::Unconfigured => {
                Err(ClientError::Config("Missing Airtable env vars".into()))
            }
            RecordsOutcome::Upstream(text) => Err(ClientError::Status(text.clone())),
        }
    }
}

pub struct FakeGeocoder {
    pub coords: (f64, f64),
    pub calls: Arc<AtomicUsize>,
}

impl Geocode for FakeGeocoder {
    fn locate(&self, _address: &str) -> (f64, f64) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.coords
    }
}

#[derive(Default)]
pub struct FakeTours {
    pub delivered: Arc<Mutex<Vec<TourRequest>>>,
    pub fail: bool,
}

impl TourSink for FakeTours {
    fn deliver(&self, request: &TourRequest) -> Result<(), ClientError> {
        if self.fail {
            return Err(ClientError::Network("connection refused".into()));
        }
        self.delivered
            .lock()
            .expect("tour log poisoned")
            .push(request.clone());
        Ok(())
    }
}

/// Handles for asserting on what the fakes saw.
#[derive(Default, Clone)]
pub struct Probes {
    pub searches: Arc<AtomicUsize>,
    pub geocodes: Arc<AtomicUsize>,
    pub tours: Arc<Mutex<Vec<TourRequest>>>,
}

impl Probes {
    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn geocodes(&self) -> usize {
        self.geocodes.load(Ordering::SeqCst)
    }
}

pub struct TestApp {
    pub config: Config,
    pub search: Result<Value, String>,
    pub records: RecordsOutcome,
    pub tours_fail: bool,
}

impl Default for TestApp {
    fn default() -> Self {
        Self {
            config: Config::default(),
            search: Err("Failed to fetch listing".into()),
            records: RecordsOutcome::Unconfigured,
            tours_fail: false,
        }
    }
}

impl TestApp {
    pub fn build(self) -> (AppState, Probes) {
        let probes = Probes::default();

        let state = AppState {
            config: self.config,
            listings: Box::new(FakeSearch {
                outcome: self.search,
                calls: probes.searches.clone(),
            }),
            records: Box::new(FakeRecords {
                outcome: self.records,
            }),
            geocoder: Box::new(FakeGeocoder {
                coords: (30.33, -81.65),
                calls: probes.geocodes.clone(),
            }),
            tours: Box::new(FakeTours {
                delivered: probes.tours.clone(),
                fail: self.tours_fail,
            }),
        };

        (state, probes)
    }
}

pub fn request(method: Method, uri: &str, body: Body) -> Request {
    let mut req = Request::new(body);
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().expect("valid test uri");
    req
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri, Body::empty())
}

pub fn post(uri: &str, content_type: &str, body: impl Into<String>) -> Request {
    let mut req = request(Method::POST, uri, Body::from(body.into()));
    req.headers_mut()
        .insert("Content-Type", content_type.parse().expect("valid header"));
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .expect("readable body");
    String::from_utf8(buf).expect("utf-8 body")
}

pub fn body_json(resp: Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("json body")
}
