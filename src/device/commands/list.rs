use crate::{RadbDevice, RemoteFileEntry, Result, SyncCommand};

impl RadbDevice {
    /// Lists a remote directory with the legacy `LIST` command.
    ///
    /// Entry sizes and timestamps are 32-bit on the wire; files over 4 GiB
    /// and timestamps past 2038 arrive truncated. Prefer
    /// [`RadbDevice::list_v2`] where the device supports it.
    pub fn list(&self, remote_path: &str) -> Result<Vec<RemoteFileEntry>> {
        let transport = self.get_transport()?;
        let mut sync = transport.start_sync()?;
        sync.send(SyncCommand::List, remote_path)?;

        let mut entries = Vec::new();
        while let Some(entry) = sync.read_directory_entry()? {
            entries.push(entry);
        }
        log::debug!("{self}: listed {} entries under {remote_path}", entries.len());
        Ok(entries)
    }

    /// Lists a remote directory with the `LIS2` command.
    ///
    /// Entry fields are 64-bit wide, so large files and post-2038 timestamps
    /// come through intact.
    pub fn list_v2(&self, remote_path: &str) -> Result<Vec<RemoteFileEntry>> {
        let transport = self.get_transport()?;
        let mut sync = transport.start_sync()?;
        sync.send(SyncCommand::ListV2, remote_path)?;

        let mut entries = Vec::new();
        while let Some(entry) = sync.read_directory_entry_v2()? {
            entries.push(entry);
        }
        log::debug!("{self}: listed {} entries under {remote_path}", entries.len());
        Ok(entries)
    }
}
