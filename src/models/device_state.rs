use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Connectivity state of a device as reported by `get-state`.
///
/// Tokens the server may add in future versions map to [`DeviceState::Unknown`]
/// instead of failing the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceState {
    /// State token not recognized by this client.
    Unknown,
    /// Device is known to the server but not responding.
    Offline,
    /// Device is connected and ready.
    Device,
    /// Device is in recovery mode.
    Recovery,
    /// Device is in bootloader/fastboot mode.
    BootLoader,
    /// Host is not authorized to talk to the device.
    Unauthorized,
    /// Authorization handshake in progress.
    Authorizing,
    /// Device is in sideload mode.
    Sideload,
    /// Connection to the device is being established.
    Connecting,
    /// Device is in rescue mode.
    Rescue,
}

impl From<&str> for DeviceState {
    fn from(value: &str) -> Self {
        match value {
            "device" => Self::Device,
            "offline" => Self::Offline,
            "bootloader" => Self::BootLoader,
            "recovery" => Self::Recovery,
            "unauthorized" => Self::Unauthorized,
            "authorizing" => Self::Authorizing,
            "connecting" => Self::Connecting,
            "sideload" => Self::Sideload,
            "rescue" => Self::Rescue,
            _ => Self::Unknown,
        }
    }
}

impl Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unknown => "unknown",
            Self::Offline => "offline",
            Self::Device => "device",
            Self::Recovery => "recovery",
            Self::BootLoader => "bootloader",
            Self::Unauthorized => "unauthorized",
            Self::Authorizing => "authorizing",
            Self::Sideload => "sideload",
            Self::Connecting => "connecting",
            Self::Rescue => "rescue",
        };
        write!(f, "{s}")
    }
}
