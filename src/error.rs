use std::num::ParseIntError;
use std::str::Utf8Error;
use std::string::FromUtf8Error;

/// Result type commonly returned throughout this crate.
pub type Result<T> = std::result::Result<T, RadbError>;

/// Represents all errors this crate can emit.
#[derive(Debug, thiserror::Error)]
pub enum RadbError {
    /// Underlying I/O failure, including failure to reach the local ADB server.
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    /// Server replied with a `FAIL` status. Carries the server message verbatim.
    #[error("ADB request failed: {0}")]
    AdbRequestFailed(String),
    /// Server sent a status token or sync frame id this client does not know.
    #[error("unknown response type: {0}")]
    UnknownResponseType(String),
    /// Command exceeds the 0xFFFF-byte limit of the 4-hex-digit length prefix.
    #[error("command too long for length prefix: {0} bytes")]
    CommandTooLong(usize),
    /// A `tcp:<port>` forward target did not hold a non-negative port number.
    #[error("invalid forward target: {0}")]
    InvalidForwardTarget(String),
    /// A line of a `list-forward` response did not match `<serial> <a> <b>`.
    #[error("cannot parse forwarding rule: {0}")]
    ForwardingRuleParseError(String),
    /// Payload declared as UTF-8 could not be decoded.
    #[error(transparent)]
    Utf8StrError(#[from] Utf8Error),
    /// Payload declared as UTF-8 could not be decoded.
    #[error(transparent)]
    Utf8StringError(#[from] FromUtf8Error),
    /// A numeric field (hexadecimal length prefix) could not be parsed.
    #[error(transparent)]
    ParseIntError(#[from] ParseIntError),
}
