use std::fmt;

use async_trait::async_trait;

use crate::network::mac::MacAddress;

/// Outcome of resolving one address. Every failure is a value; nothing is propagated.
#[derive(Clone, Debug, PartialEq)]
pub enum VendorLookup {
    /// The service knows the OUI. `elapsed_ms` is the wall-clock time of the request.
    Found { vendor: String, elapsed_ms: f64 },
    /// The service answered but has no record for the address.
    NotFound,
    /// The service answered with a non-success HTTP status.
    ServiceError(u16),
    /// The service could not be reached or its answer could not be decoded.
    TransportError(String),
}

impl VendorLookup {
    pub fn vendor(&self) -> Option<&str> {
        match self {
            VendorLookup::Found { vendor, .. } => Some(vendor.as_str()),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            VendorLookup::ServiceError(_) | VendorLookup::TransportError(_)
        )
    }
}

impl fmt::Display for VendorLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorLookup::Found { vendor, elapsed_ms } => write!(f, "{vendor} ({elapsed_ms:.2} ms)"),
            VendorLookup::NotFound => write!(f, "not found in the vendor database"),
            VendorLookup::ServiceError(status) => write!(f, "vendor service returned status {status}"),
            VendorLookup::TransportError(message) => write!(f, "request failed: {message}"),
        }
    }
}

/// Defines the contract for resolving device manufacturers from MAC addresses.
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Resolves the vendor of `mac`.
    ///
    /// Implementations must not panic and must map every failure to
    /// [`VendorLookup::ServiceError`] or [`VendorLookup::TransportError`].
    async fn get_vendor(&self, mac: &MacAddress) -> VendorLookup;
}
