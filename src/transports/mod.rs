mod sync_transport;
mod tcp_server_transport;

pub use sync_transport::SyncTransport;
pub use tcp_server_transport::Transport;
