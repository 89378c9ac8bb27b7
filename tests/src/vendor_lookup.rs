use ouilookup_common::network::mac::MacAddress;
use ouilookup_common::vendors::{VendorLookup, VendorRepository};
use ouilookup_core::vendors::MacLookupRepo;

use crate::support::{mac_path, Reply, VendorStub};

const ACME_MAC: &str = "aa:bb:cc:00:00:00";

fn repo(stub: &VendorStub) -> MacLookupRepo {
    MacLookupRepo::new(reqwest::Client::new(), stub.api_url())
}

fn mac(s: &str) -> MacAddress {
    s.parse().unwrap()
}

#[tokio::test]
async fn company_field_resolves_to_found() {
    let stub = VendorStub::start(vec![(
        mac_path(ACME_MAC),
        Reply::Json(200, r#"{"success":true,"found":true,"company":"Acme Corp"}"#),
    )])
    .await;

    match repo(&stub).get_vendor(&mac(ACME_MAC)).await {
        VendorLookup::Found { vendor, elapsed_ms } => {
            assert_eq!(vendor, "Acme Corp");
            assert!(elapsed_ms >= 0.0);
        }
        other => panic!("expected Found, got {other:?}"),
    }
}

#[tokio::test]
async fn hyphenated_input_is_sent_with_colons() {
    let stub = VendorStub::start(vec![(
        mac_path(ACME_MAC),
        Reply::Json(200, r#"{"company":"Acme Corp"}"#),
    )])
    .await;

    let lookup = repo(&stub).get_vendor(&mac("AA-BB-CC-00-00-00")).await;

    assert_eq!(lookup.vendor(), Some("Acme Corp"));
    assert_eq!(stub.requests(), vec![mac_path(ACME_MAC)]);
}

#[tokio::test]
async fn empty_object_is_not_found() {
    let stub = VendorStub::start(vec![(mac_path(ACME_MAC), Reply::Json(200, "{}"))]).await;
    assert_eq!(repo(&stub).get_vendor(&mac(ACME_MAC)).await, VendorLookup::NotFound);
}

#[tokio::test]
async fn non_success_status_is_service_error() {
    let stub = VendorStub::start(vec![(
        mac_path(ACME_MAC),
        Reply::Json(429, r#"{"error":"Too Many Requests"}"#),
    )])
    .await;

    assert_eq!(repo(&stub).get_vendor(&mac(ACME_MAC)).await, VendorLookup::ServiceError(429));
    assert_eq!(
        repo(&stub).get_vendor(&mac("11:22:33:44:55:66")).await,
        VendorLookup::ServiceError(404)
    );
}

#[tokio::test]
async fn malformed_body_is_transport_error() {
    let stub = VendorStub::start(vec![(mac_path(ACME_MAC), Reply::Json(200, "<html>oops"))]).await;
    assert!(matches!(
        repo(&stub).get_vendor(&mac(ACME_MAC)).await,
        VendorLookup::TransportError(_)
    ));
}

#[tokio::test]
async fn dropped_connection_is_transport_error() {
    let stub = VendorStub::start(vec![(mac_path(ACME_MAC), Reply::Hangup)]).await;
    match repo(&stub).get_vendor(&mac(ACME_MAC)).await {
        VendorLookup::TransportError(message) => assert!(!message.is_empty()),
        other => panic!("expected TransportError, got {other:?}"),
    }
}

#[tokio::test]
async fn repeated_lookups_agree() {
    let stub = VendorStub::start(vec![(
        mac_path(ACME_MAC),
        Reply::Json(200, r#"{"company":"Acme Corp"}"#),
    )])
    .await;
    let repo = repo(&stub);

    let first = repo.get_vendor(&mac(ACME_MAC)).await;
    let second = repo.get_vendor(&mac(ACME_MAC)).await;

    assert_eq!(first.vendor(), second.vendor());
    assert_eq!(stub.requests().len(), 2);
}
