//! Vendor resolution against the maclookup.app HTTP API.
//!
//! `GET <api_url>/<mac>` answers with a JSON object whose `company` field carries the
//! registered OUI owner. Unknown prefixes come back as `200` with a blank or missing `company`.

use std::error::Error as _;
use std::time::Instant;

use async_trait::async_trait;
use ouilookup_common::network::mac::MacAddress;
use ouilookup_common::vendors::{VendorLookup, VendorRepository};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, trace};

const COMPANY_FIELD: &str = "company";

/// HTTP-backed [`VendorRepository`]. Holds no state besides the injected client.
pub struct MacLookupRepo {
    client: Client,
    api_url: String,
}

impl MacLookupRepo {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn request_url(&self, mac: &MacAddress) -> String {
        format!("{}/{}", self.api_url, mac)
    }
}

#[async_trait]
impl VendorRepository for MacLookupRepo {
    async fn get_vendor(&self, mac: &MacAddress) -> VendorLookup {
        let url = self.request_url(mac);
        debug!("querying {url}");

        let start = Instant::now();
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return VendorLookup::TransportError(describe(&e)),
        };
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let status = response.status();
        if status != StatusCode::OK {
            return VendorLookup::ServiceError(status.as_u16());
        }

        let payload: Value = match response.json().await {
            Ok(payload) => payload,
            Err(e) => return VendorLookup::TransportError(describe(&e)),
        };
        trace!("{mac} -> {payload}");

        decode_payload(&payload, elapsed_ms)
    }
}

fn decode_payload(payload: &Value, elapsed_ms: f64) -> VendorLookup {
    let Some(object) = payload.as_object() else {
        return VendorLookup::TransportError(format!("expected a JSON object, got: {payload}"));
    };

    match object.get(COMPANY_FIELD).and_then(Value::as_str).map(str::trim) {
        Some(vendor) if !vendor.is_empty() => VendorLookup::Found {
            vendor: vendor.to_string(),
            elapsed_ms,
        },
        _ => VendorLookup::NotFound,
    }
}

/// Flattens a reqwest error and its causes into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
