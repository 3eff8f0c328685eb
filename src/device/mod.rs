mod commands;
mod shell_output;

pub use shell_output::ShellOutput;

use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::net::SocketAddrV4;

use crate::constants::DEFAULT_SERVER_ADDRESS;
use crate::{Result, Transport};

/// One target device behind the local ADB server.
///
/// A device is a lightweight value object: it holds no connection, and every
/// operation opens and closes its own. A device without a serial addresses
/// whatever single device the server currently knows ("any device").
///
/// Identity is the serial alone; two wildcard devices compare equal
/// regardless of the server address they talk through.
#[derive(Debug, Clone)]
pub struct RadbDevice {
    serial: Option<String>,
    server_addr: SocketAddrV4,
}

impl RadbDevice {
    /// Device with the given serial, behind the default local server.
    pub fn new<S: ToString>(serial: S) -> Self {
        Self {
            serial: Some(serial.to_string()),
            server_addr: DEFAULT_SERVER_ADDRESS,
        }
    }

    /// Wildcard device ("any device"), behind the default local server.
    pub fn any() -> Self {
        Self {
            serial: None,
            server_addr: DEFAULT_SERVER_ADDRESS,
        }
    }

    /// Addresses the device through an ADB server other than 127.0.0.1:5037.
    pub fn with_server_address(mut self, addr: SocketAddrV4) -> Self {
        self.server_addr = addr;
        self
    }

    /// Serial of this device, absent for the wildcard device.
    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    pub(crate) fn server_addr(&self) -> SocketAddrV4 {
        self.server_addr
    }

    /// Opens a connection and binds it to this device.
    ///
    /// On success the returned transport is still open and the caller takes
    /// over responsibility for releasing it (directly, or by handing it on to
    /// a sync session or raw stream). If the handshake fails the connection
    /// is closed here before the error surfaces.
    pub(crate) fn get_transport(&self) -> Result<Transport> {
        let mut transport = Transport::connect(self.server_addr)?;
        let command = match &self.serial {
            Some(serial) => format!("host:transport:{serial}"),
            None => "host:transport-any".to_string(),
        };
        // an early return drops the transport, closing the half-open socket
        transport.send(&command)?;
        transport.verify_response()?;
        Ok(transport)
    }
}

impl Default for RadbDevice {
    fn default() -> Self {
        Self::any()
    }
}

impl Display for RadbDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.serial {
            Some(serial) => write!(f, "device with serial {serial}"),
            None => write!(f, "any device"),
        }
    }
}

impl PartialEq for RadbDevice {
    fn eq(&self, other: &Self) -> bool {
        self.serial == other.serial
    }
}

impl Eq for RadbDevice {}

impl Hash for RadbDevice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serial.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::net::Ipv4Addr;

    fn hash_of(device: &RadbDevice) -> u64 {
        let mut hasher = DefaultHasher::new();
        device.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn identity_is_serial_only() {
        let a = RadbDevice::new("abc123");
        let b = RadbDevice::new("abc123")
            .with_server_address(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 7777));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(RadbDevice::new("abc123"), RadbDevice::new("def456"));
    }

    #[test]
    fn wildcard_devices_are_equal() {
        assert_eq!(RadbDevice::any(), RadbDevice::any());
        assert_eq!(hash_of(&RadbDevice::any()), hash_of(&RadbDevice::any()));
        assert_ne!(RadbDevice::any(), RadbDevice::new("abc123"));
    }

    #[test]
    fn display_names_the_target() {
        assert_eq!(RadbDevice::new("abc123").to_string(), "device with serial abc123");
        assert_eq!(RadbDevice::any().to_string(), "any device");
    }
}
