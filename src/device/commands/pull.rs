use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::{RadbDevice, Result, SyncCommand};

impl RadbDevice {
    /// Streams the remote file at `remote_path` into `destination`.
    ///
    /// Returns the number of bytes written. A missing remote path fails
    /// before any content arrives, carrying the server's message.
    pub fn pull<W: Write + ?Sized>(&self, remote_path: &str, destination: &mut W) -> Result<u64> {
        let transport = self.get_transport()?;
        let mut sync = transport.start_sync()?;
        sync.send(SyncCommand::Recv, remote_path)?;

        let received = sync.read_chunks_to(destination)?;
        log::debug!("{self}: pulled {received} bytes from {remote_path}");
        Ok(received)
    }

    /// Pulls the remote file at `remote_path` into a local file, which is
    /// created or truncated.
    pub fn pull_file(&self, remote_path: &str, local: &Path) -> Result<u64> {
        let mut file = File::create(local)?;
        self.pull(remote_path, &mut file)
    }
}
