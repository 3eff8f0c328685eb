use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::DEFAULT_PUSH_MODE;
use crate::{RadbDevice, Result, SyncCommand};

impl RadbDevice {
    /// Streams `source` to `remote_path` on the device.
    ///
    /// `mode` sets the permission bits of the created file; `last_modified`
    /// becomes its modification time, truncated to 32 bits on the wire.
    pub fn push<R: Read + ?Sized>(
        &self,
        source: &mut R,
        last_modified: SystemTime,
        mode: u32,
        remote_path: &str,
    ) -> Result<()> {
        let transport = self.get_transport()?;
        let mut sync = transport.start_sync()?;
        sync.send(SyncCommand::Send, &format!("{remote_path},{mode}"))?;

        let sent = sync.send_stream(source)?;
        log::debug!("{self}: pushed {sent} bytes to {remote_path}");

        let mtime = last_modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        sync.send_status(SyncCommand::Done, mtime as u32)?;
        sync.verify_status()
    }

    /// Pushes a local file to `remote_path` with the default mode 0664 and
    /// the file's own modification time.
    pub fn push_file(&self, local: &Path, remote_path: &str) -> Result<()> {
        let mut file = File::open(local)?;
        let last_modified = file.metadata()?.modified()?;
        self.push(&mut file, last_modified, DEFAULT_PUSH_MODE, remote_path)
    }
}
