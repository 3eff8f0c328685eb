use crate::{PortForwarding, RadbDevice, RadbError, Result, Transport};

impl RadbDevice {
    /// Lists the active forward rules of this device.
    pub fn list_forwarded_ports(&self) -> Result<Vec<PortForwarding>> {
        self.list_forwardings(false)
    }

    /// Lists the active reverse rules of this device.
    pub fn list_reversed_ports(&self) -> Result<Vec<PortForwarding>> {
        self.list_forwardings(true)
    }

    /// Forwards connections from `local` on the host to `remote` on the
    /// device.
    ///
    /// With `no_rebind` set the command fails if `local` is already bound.
    /// Both endpoints validate before anything is sent: a `tcp:<port>` spec
    /// must carry a non-negative port, other spec forms pass through.
    pub fn forward(&self, local: &str, remote: &str, no_rebind: bool) -> Result<()> {
        self.install_forwarding("host:", local, remote, no_rebind)
    }

    /// Forwards connections from `remote` on the device back to `local` on
    /// the host. Endpoints validate as in [`RadbDevice::forward`].
    pub fn reverse(&self, remote: &str, local: &str, no_rebind: bool) -> Result<()> {
        self.install_forwarding("reverse:", remote, local, no_rebind)
    }

    /// Removes the forward rule bound to `local`.
    pub fn remove_forward(&self, local: &str) -> Result<()> {
        self.forwarding_command("host:", &format!("killforward:{local}"))
            .map(drop)
    }

    /// Removes the reverse rule bound to `local`.
    pub fn remove_reverse(&self, local: &str) -> Result<()> {
        self.forwarding_command("reverse:", &format!("killforward:{local}"))
            .map(drop)
    }

    /// Removes every forward rule of this device.
    pub fn remove_all_forwards(&self) -> Result<()> {
        self.forwarding_command("host:", "killforward-all").map(drop)
    }

    /// Removes every reverse rule of this device.
    pub fn remove_all_reverses(&self) -> Result<()> {
        self.forwarding_command("reverse:", "killforward-all")
            .map(drop)
    }

    fn list_forwardings(&self, reverse: bool) -> Result<Vec<PortForwarding>> {
        let prefix = if reverse { "reverse:" } else { "host:" };
        let mut transport = self.forwarding_command(prefix, "list-forward")?;

        let mut raw = Vec::new();
        transport.read_response_to(&mut raw)?;
        // the reply opens with its hex length; the listing follows
        if raw.len() < 4 {
            return Err(RadbError::UnknownResponseType(
                "truncated list-forward response".to_string(),
            ));
        }
        let listing = std::str::from_utf8(&raw[4..])?;
        listing
            .lines()
            .map(|line| PortForwarding::parse(line, reverse))
            .collect()
    }

    fn install_forwarding(
        &self,
        prefix: &str,
        first: &str,
        second: &str,
        no_rebind: bool,
    ) -> Result<()> {
        validate_forward_target(first)?;
        validate_forward_target(second)?;
        let command = if no_rebind {
            format!("forward:norebind:{first};{second}")
        } else {
            format!("forward:{first};{second}")
        };
        self.forwarding_command(prefix, &command).map(drop)
    }

    /// Runs one forwarding command on a device-bound transport and returns
    /// the transport, still open, for replies that carry a payload.
    fn forwarding_command(&self, prefix: &str, command: &str) -> Result<Transport> {
        let mut transport = self.get_transport()?;
        log::debug!("{self}: {prefix}{command}");
        transport.send(&format!("{prefix}{command}"))?;
        transport.verify_response()?;
        Ok(transport)
    }
}

/// Checks a forward endpoint spec: `tcp:<port>` must name a non-negative
/// port, every other spec form (local sockets, abstract names) is accepted
/// unchanged.
fn validate_forward_target(target: &str) -> Result<()> {
    if let Some(port) = target.strip_prefix("tcp:") {
        match port.parse::<i32>() {
            Ok(p) if p >= 0 => {}
            _ => return Err(RadbError::InvalidForwardTarget(target.to_string())),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tcp_targets_need_a_non_negative_port() {
        assert!(validate_forward_target("tcp:0").is_ok());
        assert!(validate_forward_target("tcp:5000").is_ok());
        assert!(validate_forward_target("tcp:65536").is_ok());
        assert!(validate_forward_target("tcp:-5000").is_err());
        assert!(validate_forward_target("tcp:").is_err());
        assert!(validate_forward_target("tcp:abc").is_err());
        assert!(validate_forward_target("tcp:99999999999999").is_err());
    }

    #[test]
    fn non_tcp_targets_always_pass() {
        assert!(validate_forward_target("localabstract:gdbserver").is_ok());
        assert!(validate_forward_target("localfilesystem:/tmp/sock").is_ok());
        assert!(validate_forward_target("dev:/dev/ttyS0").is_ok());
        assert!(validate_forward_target("jdwp:1234").is_ok());
    }

    #[test]
    fn invalid_target_error_names_the_endpoint() {
        match validate_forward_target("tcp:-5000") {
            Err(RadbError::InvalidForwardTarget(target)) => assert_eq!(target, "tcp:-5000"),
            other => panic!("expected InvalidForwardTarget, got {other:?}"),
        }
    }
}
