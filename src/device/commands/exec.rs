use std::io::BufReader;
use std::net::TcpStream;

use crate::utils::build_command_line;
use crate::{RadbDevice, Result};

impl RadbDevice {
    /// Executes a command with raw binary output.
    ///
    /// Unlike [`RadbDevice::shell`], nothing rewrites the byte stream, which
    /// makes this the right call for binary payloads such as `screencap`.
    /// Requires a device running Android 5.0 or later. Dropping the reader
    /// closes the connection.
    pub fn exec(&self, command: &str, args: &[&str]) -> Result<BufReader<TcpStream>> {
        let mut transport = self.get_transport()?;
        let line = build_command_line(command, args);
        log::debug!("{self}: exec \"{line}\"");
        transport.send(&format!("exec:{line}"))?;
        transport.verify_response()?;
        Ok(BufReader::new(transport.into_raw_stream()))
    }
}
