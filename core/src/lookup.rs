//! # Vendor Lookup Service
//!
//! Implements the two use cases of the tool:
//! 1. Resolving a single user-supplied address.
//! 2. Enumerating the neighbor table and resolving every entry that carries a vendor identity.
//!
//! Batch lookups run strictly one after another. A failed lookup is reported through the
//! callback like any other outcome and never ends the batch; only a failure to read the
//! neighbor table does.

use ouilookup_common::error::NeighborTableError;
use ouilookup_common::network::mac::MacAddress;
use ouilookup_common::network::neighbor::NeighborEntry;
use ouilookup_common::system::NeighborTable;
use ouilookup_common::vendors::{VendorLookup, VendorRepository};
use tracing::debug;

/// What happened to one non-sentinel neighbor entry.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchOutcome {
    /// The entry was sent to the vendor repository.
    Resolved { mac: MacAddress, lookup: VendorLookup },
    /// The link-layer token is not an address and was never looked up.
    Unparseable,
}

/// Counters for one batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub entries: usize,
    pub sentinels: usize,
    pub unparseable: usize,
    pub lookups: usize,
    pub found: usize,
    pub failures: usize,
}

pub struct LookupService {
    neighbors: Box<dyn NeighborTable>,
    vendor_repo: Box<dyn VendorRepository>,
}

impl LookupService {
    pub fn new(neighbors: Box<dyn NeighborTable>, vendor_repo: Box<dyn VendorRepository>) -> Self {
        Self {
            neighbors,
            vendor_repo,
        }
    }

    pub async fn lookup_mac(&self, mac: &MacAddress) -> VendorLookup {
        self.vendor_repo.get_vendor(mac).await
    }

    /// Reads the neighbor table and resolves each entry in OS order.
    ///
    /// `on_outcome` runs once per non-sentinel entry, before the next lookup starts.
    pub async fn lookup_neighbors<F>(&self, mut on_outcome: F) -> Result<BatchSummary, NeighborTableError>
    where
        F: FnMut(&NeighborEntry, &BatchOutcome),
    {
        let entries = self.neighbors.read_neighbor_table()?;
        let mut summary = BatchSummary {
            entries: entries.len(),
            ..BatchSummary::default()
        };

        for entry in &entries {
            if entry.is_sentinel() {
                debug!("skipping {} ({})", entry.network_addr, entry.link_addr);
                summary.sentinels += 1;
                continue;
            }

            let outcome = match entry.mac() {
                Some(mac) => {
                    let lookup = self.vendor_repo.get_vendor(&mac).await;
                    summary.lookups += 1;
                    if lookup.vendor().is_some() {
                        summary.found += 1;
                    }
                    if lookup.is_failure() {
                        debug!("lookup for {mac} failed: {lookup}");
                        summary.failures += 1;
                    }
                    BatchOutcome::Resolved { mac, lookup }
                }
                None => {
                    summary.unparseable += 1;
                    BatchOutcome::Unparseable
                }
            };

            on_outcome(entry, &outcome);
        }

        Ok(summary)
    }
}
