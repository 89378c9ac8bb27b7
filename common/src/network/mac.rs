//! # Link-layer Address Model
//!
//! Operating systems and vendors disagree on how a MAC address is written:
//! * Colon separated: `aa:bb:cc:dd:ee:ff` (Linux, macOS drops leading zeros: `0:1b:2c:d:e:f`).
//! * Hyphen separated: `AA-BB-CC-DD-EE-FF` (Windows `arp -a`).
//! * Dot grouped: `aabb.ccdd.eeff` (Cisco).
//! * Bare: `aabbccddeeff`.
//!
//! [`MacAddress`] accepts all of them and always renders the canonical lowercase colon form.

use std::fmt;
use std::str::FromStr;

use crate::error::MacParseError;

const OCTETS: usize = 6;

/// A 6-octet hardware address. Equality ignores the notation it was parsed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress([u8; OCTETS]);

impl MacAddress {
    pub const BROADCAST: MacAddress = MacAddress([0xff; OCTETS]);
    pub const ZERO: MacAddress = MacAddress([0x00; OCTETS]);

    pub const fn new(octets: [u8; OCTETS]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; OCTETS] {
        self.0
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        if let Some(c) = input
            .chars()
            .find(|c| !c.is_ascii_hexdigit() && !matches!(c, ':' | '-' | '.'))
        {
            tracing::trace!("rejecting '{input}' at '{c}'");
            return Err(MacParseError::InvalidCharacter(s.to_string()));
        }

        let separators: Vec<char> = [':', '-', '.']
            .into_iter()
            .filter(|sep| input.contains(*sep))
            .collect();

        let octets = match separators.as_slice() {
            [] => parse_bare(input).ok_or_else(|| MacParseError::InvalidLength(s.to_string()))?,
            [':'] | ['-'] => parse_octet_groups(input, separators[0])
                .ok_or_else(|| MacParseError::InvalidGrouping(s.to_string()))?,
            ['.'] => {
                parse_dotted(input).ok_or_else(|| MacParseError::InvalidGrouping(s.to_string()))?
            }
            _ => return Err(MacParseError::InvalidGrouping(s.to_string())),
        };

        Ok(MacAddress(octets))
    }
}

/// `aabbccddeeff`
fn parse_bare(input: &str) -> Option<[u8; OCTETS]> {
    if input.len() != OCTETS * 2 {
        return None;
    }
    let mut octets = [0u8; OCTETS];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(&input[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(octets)
}

/// `aa:bb:cc:dd:ee:ff` or `aa-bb-cc-dd-ee-ff`, one or two digits per group.
fn parse_octet_groups(input: &str, sep: char) -> Option<[u8; OCTETS]> {
    let groups: Vec<&str> = input.split(sep).collect();
    if groups.len() != OCTETS {
        return None;
    }
    let mut octets = [0u8; OCTETS];
    for (octet, group) in octets.iter_mut().zip(groups) {
        if group.is_empty() || group.len() > 2 {
            return None;
        }
        *octet = u8::from_str_radix(group, 16).ok()?;
    }
    Some(octets)
}

/// `aabb.ccdd.eeff`
fn parse_dotted(input: &str) -> Option<[u8; OCTETS]> {
    let groups: Vec<&str> = input.split('.').collect();
    if groups.len() != 3 || groups.iter().any(|g| g.len() != 4) {
        return None;
    }
    parse_bare(&groups.concat())
}
