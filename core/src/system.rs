use std::process::Command;

use ouilookup_common::error::NeighborTableError;
use ouilookup_common::network::neighbor::{self, NeighborEntry};
use ouilookup_common::system::NeighborTable;
use tracing::debug;

const ARP_PROGRAM: &str = "arp";
const ARP_ARGS: &[&str] = &["-a"];

/// Reads the neighbor table by running `arp -a` directly, without a shell.
pub struct SystemRepo {
    program: String,
    args: Vec<String>,
}

impl SystemRepo {
    /// Runs an arbitrary listing command instead of `arp -a`.
    pub fn with_command(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

impl Default for SystemRepo {
    fn default() -> Self {
        Self::with_command(ARP_PROGRAM, ARP_ARGS)
    }
}

impl NeighborTable for SystemRepo {
    fn read_neighbor_table(&self) -> Result<Vec<NeighborEntry>, NeighborTableError> {
        let command = self.command_line();
        debug!("running `{command}`");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| NeighborTableError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NeighborTableError::CommandFailed {
                command,
                exit_code: output.status.code(),
                output: format!("{stdout}{stderr}"),
            });
        }

        let entries = neighbor::parse_neighbor_table(&stdout);
        debug!("neighbor table holds {} entries", entries.len());
        Ok(entries)
    }
}
