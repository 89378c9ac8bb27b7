use std::time::{Duration, Instant};

use colored::*;
use ouilookup_common::config::Config;
use ouilookup_common::network::neighbor::NeighborEntry;
use ouilookup_core::lookup::{BatchOutcome, BatchSummary};
use tracing::error;

use crate::commands;
use crate::terminal::{colors, format, print};

pub async fn lookup_all(cfg: &Config) -> anyhow::Result<()> {
    let service = commands::build_service(cfg)?;
    let start_time: Instant = Instant::now();
    let mut idx: usize = 0;

    let result = service
        .lookup_neighbors(|entry, outcome| {
            print_entry(idx, entry, outcome);
            idx += 1;
        })
        .await;

    match result {
        Ok(summary) => print_summary(&summary, start_time.elapsed()),
        Err(e) => error!("Failed to read the ARP table: {e}"),
    }
    Ok(())
}

fn print_entry(idx: usize, entry: &NeighborEntry, outcome: &BatchOutcome) {
    print::tree_head(idx, &entry.network_addr);
    let details: Vec<format::Detail> = match outcome {
        BatchOutcome::Resolved { mac, lookup } => {
            let mut details = vec![format::mac_to_detail(mac)];
            details.extend(format::lookup_to_details(lookup));
            details
        }
        BatchOutcome::Unparseable => vec![
            ("MAC".to_string(), entry.link_addr.color(colors::MAC_ADDR)),
            ("Vendor".to_string(), "not a hardware address".color(colors::MUTED).italic()),
        ],
    };
    print::as_tree_one_level(details);
}

fn print_summary(summary: &BatchSummary, total_time: Duration) {
    if summary.lookups == 0 && summary.unparseable == 0 {
        print::header("no devices to look up");
    } else {
        let found: ColoredString = format!("{} of {} vendors", summary.found, summary.lookups).bold().green();
        let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
        let output: String = format!("Lookup complete: {found} identified in {total_time}");

        print::fat_separator();
        print::centerln(&output);
    }

    for (note, color) in summary_notes(summary) {
        print::centerln(&format!("{}", note.color(color)));
    }
}

/// Failure and skip counts worth reporting, empty entries left out.
fn summary_notes(summary: &BatchSummary) -> Vec<(String, Color)> {
    let mut notes = Vec::new();
    if summary.failures > 0 {
        notes.push((format!("{} lookups failed", summary.failures), colors::ERROR));
    }
    if summary.sentinels > 0 {
        notes.push((
            format!("{} broadcast or unresolved entries skipped", summary.sentinels),
            colors::MUTED,
        ));
    }
    notes
}
