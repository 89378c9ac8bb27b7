//! Adapters and use cases behind the `ouilookup` CLI.
//!
//! * **[`system`]**: reads the host neighbor table through `arp -a`.
//! * **[`vendors`]**: resolves vendors against the maclookup.app HTTP API.
//! * **[`lookup`]**: single and batch lookups over any implementation of the ports above.

pub mod lookup;
pub mod system;
pub mod vendors;
