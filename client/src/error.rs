use pokeclash_protocol::DataError;
use thiserror::Error;

/// Roster loading failure. Always fatal to game start.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to fetch {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {url}: server returned {status}")]
    Status { url: String, status: u16 },

    #[error("Malformed data for {name}")]
    Data {
        name: String,
        #[source]
        source: DataError,
    },
}

impl RosterError {
    /// Transport or status failure, as opposed to a bad payload
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }
}

/// Audio that could not be played. Never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to play {path}: {reason}")]
pub struct PlaybackError {
    pub path: String,
    pub reason: String,
}

impl PlaybackError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
