#![crate_type = "lib"]
#![forbid(unsafe_code)]
#![forbid(missing_debug_implementations)]
#![forbid(missing_docs)]
#![doc = include_str!("../README.md")]

mod constants;
mod device;
mod error;
mod models;
mod transports;
mod utils;

pub use constants::{DEFAULT_PUSH_MODE, DEFAULT_TCPIP_PORT};
pub use device::{RadbDevice, ShellOutput};
pub use error::{RadbError, Result};
pub use models::{DeviceState, PortForwarding, RemoteFileEntry, SyncCommand};
pub use transports::{SyncTransport, Transport};
