mod adb_request_status;
mod device_state;
mod port_forwarding;
mod remote_file_entry;
mod sync_command;

pub(crate) use adb_request_status::AdbRequestStatus;
pub use device_state::DeviceState;
pub use port_forwarding::PortForwarding;
pub use remote_file_entry::RemoteFileEntry;
pub use sync_command::SyncCommand;
