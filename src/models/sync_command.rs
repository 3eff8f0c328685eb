use std::fmt::Display;

/// 4-byte frame ids of the sync sub-protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncCommand {
    /// List a directory (32-bit entry fields).
    List,
    /// List a directory (64-bit entry fields).
    ListV2,
    /// Upload a file.
    Send,
    /// Download a file.
    Recv,
    /// One chunk of file content.
    Data,
    /// Final frame of a transfer or listing.
    Done,
    /// Directory entry with 32-bit fields.
    Dent,
    /// Directory entry with 64-bit fields.
    DentV2,
    /// Success status.
    Okay,
    /// Failure status; a length-prefixed message follows.
    Fail,
}

impl SyncCommand {
    /// Wire representation of this frame id.
    pub fn code(&self) -> &'static [u8; 4] {
        match self {
            Self::List => b"LIST",
            Self::ListV2 => b"LIS2",
            Self::Send => b"SEND",
            Self::Recv => b"RECV",
            Self::Data => b"DATA",
            Self::Done => b"DONE",
            Self::Dent => b"DENT",
            Self::DentV2 => b"DNT2",
            Self::Okay => b"OKAY",
            Self::Fail => b"FAIL",
        }
    }
}

impl Display for SyncCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", std::str::from_utf8(self.code()).unwrap_or("????"))
    }
}
