//! # Neighbor Table Model
//!
//! Parses the textual output of `arp -a` into [`NeighborEntry`] values.
//!
//! Two layouts are understood:
//! * **Columnar** (Windows): `192.168.1.10   aa-bb-cc-dd-ee-ff   dynamic`.
//!   Column 1 is the network address, column 2 the link-layer address, the rest is ignored.
//! * **BSD** (Linux net-tools, macOS): `? (192.168.1.10) at aa:bb:cc:dd:ee:ff [ether] on eth0`.
//!
//! Header lines such as `Interface: 192.168.1.1 --- 0xb` or
//! `Internet Address  Physical Address  Type` are skipped because their second column is
//! neither an address nor an incomplete-resolution marker.

use super::mac::MacAddress;

/// Marker the OS prints in place of a link-layer address while resolution is pending.
/// Windows truncates it to `incompl`, macOS prints `(incomplete)`, Linux net-tools `<incomplete>`.
const INCOMPLETE_MARKER: &str = "incompl";

/// One row of the neighbor table as reported by the OS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborEntry {
    /// Network-layer address, kept verbatim.
    pub network_addr: String,
    /// Link-layer token, kept in the OS-native notation.
    pub link_addr: String,
}

impl NeighborEntry {
    pub fn new(network_addr: impl Into<String>, link_addr: impl Into<String>) -> Self {
        Self {
            network_addr: network_addr.into(),
            link_addr: link_addr.into(),
        }
    }

    /// Parses the link-layer token into a [`MacAddress`], if it is one.
    pub fn mac(&self) -> Option<MacAddress> {
        self.link_addr.parse().ok()
    }

    /// Whether this entry carries no vendor identity (broadcast, all-zero or unresolved).
    pub fn is_sentinel(&self) -> bool {
        is_sentinel(&self.link_addr)
    }
}

/// Case- and separator-insensitive check against the broadcast address, the all-zero
/// address and the incomplete-resolution marker.
pub fn is_sentinel(link_addr: &str) -> bool {
    if is_incomplete_marker(link_addr) {
        return true;
    }
    match link_addr.parse::<MacAddress>() {
        Ok(mac) => mac.is_broadcast() || mac.is_zero(),
        Err(_) => false,
    }
}

fn is_incomplete_marker(token: &str) -> bool {
    token
        .trim_matches(|c| matches!(c, '(' | ')' | '<' | '>'))
        .to_ascii_lowercase()
        .starts_with(INCOMPLETE_MARKER)
}

fn looks_like_link_addr(token: &str) -> bool {
    is_incomplete_marker(token) || token.parse::<MacAddress>().is_ok()
}

/// Parses `arp -a` output, preserving the order in which the OS reported the entries.
pub fn parse_neighbor_table(output: &str) -> Vec<NeighborEntry> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<NeighborEntry> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    if let Some(entry) = parse_bsd_line(&tokens) {
        return Some(entry);
    }

    let (network_addr, link_addr) = (tokens[0], tokens[1]);
    if !looks_like_link_addr(link_addr) {
        tracing::trace!("skipping neighbor table header: {line:?}");
        return None;
    }
    Some(NeighborEntry::new(network_addr, link_addr))
}

/// `<host> (<ip>) at <mac> ...`
fn parse_bsd_line(tokens: &[&str]) -> Option<NeighborEntry> {
    let [_host, ip, at, link_addr, ..] = tokens else {
        return None;
    };
    if *at != "at" {
        return None;
    }
    let ip = ip.strip_prefix('(')?.strip_suffix(')')?;
    looks_like_link_addr(link_addr).then(|| NeighborEntry::new(ip, *link_addr))
}
