use thiserror::Error;

/// Failure to read the host neighbor table. Nothing can be resolved once this is returned.
#[derive(Debug, Error)]
pub enum NeighborTableError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {}: {}", exit_code_str(.exit_code), .output.trim())]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        output: String,
    },
}

fn exit_code_str(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacParseError {
    #[error("'{0}' does not contain 12 hexadecimal digits")]
    InvalidLength(String),
    #[error("'{0}' contains a character that is neither hex nor a separator")]
    InvalidCharacter(String),
    #[error("'{0}' mixes separators or groups digits unevenly")]
    InvalidGrouping(String),
}
