use crate::{DeviceState, RadbDevice, Result, Transport};

impl RadbDevice {
    /// Queries the connectivity state of this device.
    ///
    /// Unrecognized state tokens map to [`DeviceState::Unknown`] instead of
    /// failing, so the query keeps working against newer servers.
    pub fn get_state(&self) -> Result<DeviceState> {
        let mut transport = Transport::connect(self.server_addr())?;
        let command = match self.serial() {
            Some(serial) => format!("host-serial:{serial}:get-state"),
            None => "host:get-state".to_string(),
        };
        transport.send(&command)?;
        transport.verify_response()?;
        let state = transport.read_string()?;
        log::debug!("{self} is in state \"{state}\"");
        Ok(DeviceState::from(state.as_str()))
    }
}
