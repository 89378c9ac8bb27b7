use crate::terminal::colors;
use colored::*;
use ouilookup_common::network::mac::MacAddress;
use ouilookup_common::vendors::VendorLookup;

pub type Detail = (String, ColoredString);

pub fn mac_to_detail(mac: &MacAddress) -> Detail {
    ("MAC".to_string(), mac.to_string().color(colors::MAC_ADDR))
}

/// Vendor line plus, when the service answered with a vendor, the response time.
pub fn lookup_to_details(lookup: &VendorLookup) -> Vec<Detail> {
    match lookup {
        VendorLookup::Found { vendor, elapsed_ms } => vec![
            ("Vendor".to_string(), vendor.color(colors::VENDOR).bold()),
            (
                "Time".to_string(),
                format!("{elapsed_ms:.2} ms").color(colors::ACCENT),
            ),
        ],
        VendorLookup::NotFound => vec![(
            "Vendor".to_string(),
            "not found in the database".color(colors::MUTED).italic(),
        )],
        VendorLookup::ServiceError(status) => vec![(
            "Error".to_string(),
            format!("vendor service returned status {status}").color(colors::ERROR),
        )],
        VendorLookup::TransportError(message) => vec![(
            "Error".to_string(),
            format!("request failed: {message}").color(colors::ERROR),
        )],
    }
}
