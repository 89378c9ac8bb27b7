use crate::error::NeighborTableError;
use crate::network::neighbor::NeighborEntry;

/// Access to the host's neighbor (ARP) table.
pub trait NeighborTable: Send + Sync {
    /// Reads the table once, in the order reported by the OS.
    fn read_neighbor_table(&self) -> Result<Vec<NeighborEntry>, NeighborTableError>;
}
