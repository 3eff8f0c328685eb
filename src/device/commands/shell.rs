use std::io::Write;

use crate::device::ShellOutput;
use crate::utils::build_command_line;
use crate::{RadbDevice, Result};

impl RadbDevice {
    /// Executes a shell command and returns its combined stdout/stderr.
    ///
    /// Arguments are quoted individually; the command token itself is not.
    /// The returned reader strips the `\r\n` line endings the legacy shell
    /// service produces; use [`RadbDevice::exec`] for binary-safe output.
    pub fn shell(&self, command: &str, args: &[&str]) -> Result<ShellOutput> {
        let mut transport = self.get_transport()?;
        let line = build_command_line(command, args);
        log::debug!("{self}: shell \"{line}\"");
        transport.send(&format!("shell:{line}"))?;
        transport.verify_response()?;
        Ok(ShellOutput::new(transport.into_raw_stream()))
    }

    /// Executes a shell command, writing its output into `sink`.
    ///
    /// Convenience over [`RadbDevice::shell`] for callers that only want the
    /// output collected; the connection is closed before returning.
    pub fn shell_to<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        command: &str,
        args: &[&str],
    ) -> Result<u64> {
        let mut output = self.shell(command, args)?;
        Ok(std::io::copy(&mut output, sink)?)
    }
}
