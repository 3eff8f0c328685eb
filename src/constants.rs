use std::net::{Ipv4Addr, SocketAddrV4};

/// Address the local ADB server listens on unless configured otherwise.
pub(crate) const DEFAULT_SERVER_ADDRESS: SocketAddrV4 =
    SocketAddrV4::new(Ipv4Addr::LOCALHOST, 5037);

/// Port a device binds when switched to TCP/IP mode without an explicit port.
pub const DEFAULT_TCPIP_PORT: u16 = 5555;

/// File mode used by [`crate::RadbDevice::push_file`] when none is given.
pub const DEFAULT_PUSH_MODE: u32 = 0o664;

/// Upper bound of one sync `DATA` chunk.
pub(crate) const SYNC_CHUNK_SIZE: usize = 64 * 1024;

/// Longest command representable by the 4-hex-digit length prefix.
pub(crate) const MAX_COMMAND_LENGTH: usize = u16::MAX as usize;
