use crate::constants::DEFAULT_TCPIP_PORT;
use crate::{RadbDevice, Result};

impl RadbDevice {
    /// Restarts the device's ADB daemon listening on the given TCP port.
    pub fn tcpip(&self, port: u16) -> Result<()> {
        let mut transport = self.get_transport()?;
        log::debug!("{self}: enabling ADB over TCP on port {port}");
        transport.send(&format!("tcpip:{port}"))?;
        transport.verify_response()?;
        // the server may print an informational line after OKAY; it is not
        // part of the protocol and the connection closes without reading it
        Ok(())
    }

    /// Restarts the device's ADB daemon on the default TCP port, 5555.
    pub fn tcpip_default(&self) -> Result<()> {
        self.tcpip(DEFAULT_TCPIP_PORT)
    }
}
