use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directory-type bit of a file mode, shared by both entry widths.
const MODE_DIRECTORY_BIT: u64 = 1 << 14;

/// One entry of a remote directory listing.
///
/// `LIST` replies carry 32-bit mode/size/mtime fields ([`RemoteFileEntry::V1`]);
/// `LIS2` replies carry 64-bit fields ([`RemoteFileEntry::V2`]), needed for
/// files over 4 GiB and timestamps past 2038. Both variants answer the same
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteFileEntry {
    /// Entry of a legacy `LIST` reply.
    V1 {
        /// File name, relative to the listed directory.
        name: String,
        /// POSIX file mode bits.
        mode: u32,
        /// Size in bytes, truncated to 32 bits by the server.
        size: u32,
        /// Modification time in seconds since the epoch, truncated to 32 bits.
        last_modified: u32,
    },
    /// Entry of a `LIS2` reply.
    V2 {
        /// File name, relative to the listed directory.
        name: String,
        /// POSIX file mode bits.
        mode: u64,
        /// Size in bytes.
        size: u64,
        /// Modification time in seconds since the epoch.
        last_modified: u64,
    },
}

impl RemoteFileEntry {
    /// File name, relative to the listed directory.
    pub fn name(&self) -> &str {
        match self {
            Self::V1 { name, .. } | Self::V2 { name, .. } => name,
        }
    }

    /// POSIX file mode bits.
    pub fn mode(&self) -> u64 {
        match self {
            Self::V1 { mode, .. } => u64::from(*mode),
            Self::V2 { mode, .. } => *mode,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        match self {
            Self::V1 { size, .. } => u64::from(*size),
            Self::V2 { size, .. } => *size,
        }
    }

    /// Modification time in seconds since the epoch.
    pub fn last_modified(&self) -> u64 {
        match self {
            Self::V1 { last_modified, .. } => u64::from(*last_modified),
            Self::V2 { last_modified, .. } => *last_modified,
        }
    }

    /// Modification time as a UTC timestamp, when representable.
    pub fn last_modified_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::try_from(self.last_modified()).ok()?, 0)
    }

    /// Whether the directory bit of the mode is set.
    pub fn is_directory(&self) -> bool {
        self.mode() & MODE_DIRECTORY_BIT == MODE_DIRECTORY_BIT
    }
}
