//! Error types for playback-control commands
//!
//! Every failing command produces exactly one [`MpdError`], which maps onto an
//! MPD `ACK` line. Failures reported by the collaborating actors arrive as
//! [`ActorError`] and surface to clients as system errors.

use thiserror::Error;

/// `ACK_ERROR_ARG`
pub const ACK_ERROR_ARG: u32 = 2;

/// `ACK_ERROR_NO_EXIST`
pub const ACK_ERROR_NO_EXIST: u32 = 50;

/// `ACK_ERROR_SYSTEM`
pub const ACK_ERROR_SYSTEM: u32 = 52;

/// Protocol-level command errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MpdError {
    /// Malformed or out-of-range client-supplied value
    #[error("{0}")]
    Arg(String),

    /// Referenced song does not exist in the tracklist
    #[error("{0}")]
    NoExist(String),

    /// Command is a stub
    #[error("Not implemented")]
    NotImplemented,

    /// An actor rejected the operation or returned unreadable state
    #[error("{0}")]
    System(String),
}

impl MpdError {
    /// Create an argument error
    pub fn arg(msg: impl Into<String>) -> Self {
        Self::Arg(msg.into())
    }

    /// Create a no-such-entity error
    pub fn no_exist(msg: impl Into<String>) -> Self {
        Self::NoExist(msg.into())
    }

    /// Create a system error
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// MPD `ACK` error code for this error
    pub fn code(&self) -> u32 {
        match self {
            Self::Arg(_) => ACK_ERROR_ARG,
            Self::NoExist(_) => ACK_ERROR_NO_EXIST,
            Self::NotImplemented => 0,
            Self::System(_) => ACK_ERROR_SYSTEM,
        }
    }

    /// Render the protocol error line, e.g. `ACK [2@0] {play} Bad song index`
    ///
    /// `index` is the position of the failing command inside a command list
    /// (0 outside of command lists).
    pub fn to_ack(&self, index: usize, command: &str) -> String {
        format!("ACK [{}@{}] {{{}}} {}", self.code(), index, command, self)
    }
}

impl From<ActorError> for MpdError {
    fn from(err: ActorError) -> Self {
        Self::System(err.to_string())
    }
}

/// Failures reported by the playback, tracklist, or mixer actors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
    /// The actor is gone or not reachable
    #[error("Actor unavailable: {0}")]
    Unavailable(String),

    /// The actor did not acknowledge in time
    #[error("Actor request timed out")]
    Timeout,

    /// The actor refused the request
    #[error("Actor rejected request: {0}")]
    Rejected(String),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML could not be parsed into a config
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for command execution
pub type Result<T> = std::result::Result<T, MpdError>;

/// Result type for actor requests
pub type ActorResult<T> = std::result::Result<T, ActorError>;
