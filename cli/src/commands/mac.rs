use ouilookup_common::config::Config;
use ouilookup_common::network::mac::MacAddress;
use ouilookup_common::vendors::VendorLookup;

use crate::commands;
use crate::terminal::{colors, format, print};
use colored::*;

pub async fn lookup(mac: MacAddress, cfg: &Config) -> anyhow::Result<()> {
    let service = commands::build_service(cfg)?;
    let result: VendorLookup = service.lookup_mac(&mac).await;

    let mut details: Vec<format::Detail> = vec![format::mac_to_detail(&mac)];
    details.extend(format::lookup_to_details(&result));
    let key_width: usize = details.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    for (key, value) in details {
        print::aligned_line(&key, value, key_width);
    }

    if let VendorLookup::NotFound = result {
        print::print(&format!(
            "{}",
            "The OUI is unassigned or the address is locally administered.".color(colors::MUTED)
        ));
    }
    Ok(())
}
