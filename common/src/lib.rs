//! Shared models and ports for `ouilookup`.
//!
//! * **[`network`]**: link-layer addresses and neighbor-table parsing.
//! * **[`vendors`]**: the vendor lookup port and its result type.
//! * **[`system`]**: the neighbor-table port implemented against the host OS.
//! * **[`error`]**: typed errors shared across crates.

pub mod config;
pub mod error;
pub mod network;
pub mod system;
pub mod vendors;
