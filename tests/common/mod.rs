//! Scripted in-process stand-in for the local ADB server.
//!
//! Each test spawns a server with a script that accepts the connections the
//! exercised operation is expected to open, asserts on the exact bytes the
//! client sends, and replies with canned protocol frames.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{Ipv4Addr, SocketAddrV4, TcpListener, TcpStream};
use std::thread::JoinHandle;

use radb_client::RadbDevice;

pub struct FakeAdbServer {
    addr: SocketAddrV4,
    handle: JoinHandle<()>,
}

impl FakeAdbServer {
    /// Starts the scripted server on an ephemeral local port.
    pub fn start<F>(script: F) -> Self
    where
        F: FnOnce(TcpListener) + Send + 'static,
    {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = std::thread::spawn(move || script(listener));
        Self {
            addr: SocketAddrV4::new(Ipv4Addr::LOCALHOST, port),
            handle,
        }
    }

    /// A wildcard device pointed at this server.
    pub fn any_device(&self) -> RadbDevice {
        RadbDevice::any().with_server_address(self.addr)
    }

    /// A serial-addressed device pointed at this server.
    pub fn device(&self, serial: &str) -> RadbDevice {
        RadbDevice::new(serial).with_server_address(self.addr)
    }

    pub fn addr(&self) -> SocketAddrV4 {
        self.addr
    }

    /// Waits for the script to finish, surfacing its assertion failures.
    pub fn join(self) {
        self.handle.join().expect("fake adb server script failed");
    }
}

// --- host protocol helpers -------------------------------------------------

/// Reads one hex4-length-prefixed command.
pub fn read_command(stream: &mut TcpStream) -> String {
    let mut hex = [0_u8; 4];
    stream.read_exact(&mut hex).unwrap();
    let length = usize::from_str_radix(std::str::from_utf8(&hex).unwrap(), 16).unwrap();
    let mut payload = vec![0_u8; length];
    stream.read_exact(&mut payload).unwrap();
    String::from_utf8(payload).unwrap()
}

pub fn expect_command(stream: &mut TcpStream, expected: &str) {
    assert_eq!(read_command(stream), expected);
}

/// Reads the `host:transport-any` handshake and acknowledges it.
pub fn accept_handshake_any(stream: &mut TcpStream) {
    expect_command(stream, "host:transport-any");
    send_okay(stream);
}

/// Reads the `host:transport:<serial>` handshake and acknowledges it.
pub fn accept_handshake(stream: &mut TcpStream, serial: &str) {
    expect_command(stream, &format!("host:transport:{serial}"));
    send_okay(stream);
}

pub fn send_okay(stream: &mut TcpStream) {
    stream.write_all(b"OKAY").unwrap();
}

pub fn send_fail(stream: &mut TcpStream, message: &str) {
    stream.write_all(b"FAIL").unwrap();
    send_hex_string(stream, message);
}

/// Writes a hex4-length-prefixed string payload.
pub fn send_hex_string(stream: &mut TcpStream, payload: &str) {
    stream
        .write_all(format!("{:04x}{}", payload.len(), payload).as_bytes())
        .unwrap();
}

// --- sync sub-protocol helpers ---------------------------------------------

pub fn read_frame_id(stream: &mut TcpStream) -> [u8; 4] {
    let mut id = [0_u8; 4];
    stream.read_exact(&mut id).unwrap();
    id
}

pub fn read_le_u32(stream: &mut TcpStream) -> u32 {
    let mut bytes = [0_u8; 4];
    stream.read_exact(&mut bytes).unwrap();
    u32::from_le_bytes(bytes)
}

pub fn write_le_u32(stream: &mut TcpStream, value: u32) {
    stream.write_all(&value.to_le_bytes()).unwrap();
}

pub fn write_le_u64(stream: &mut TcpStream, value: u64) {
    stream.write_all(&value.to_le_bytes()).unwrap();
}

/// Reads one sync request frame (`LIST`, `SEND`, `RECV`, …) and its argument.
pub fn read_sync_request(stream: &mut TcpStream) -> (String, String) {
    let id = read_frame_id(stream);
    let length = read_le_u32(stream) as usize;
    let mut payload = vec![0_u8; length];
    stream.read_exact(&mut payload).unwrap();
    (
        String::from_utf8(id.to_vec()).unwrap(),
        String::from_utf8(payload).unwrap(),
    )
}

/// Consumes an entire upload: the `SEND` frame, every `DATA` chunk, and the
/// closing `DONE`. Returns the destination argument, content, and mtime.
pub fn read_push(stream: &mut TcpStream) -> (String, Vec<u8>, u32) {
    let (id, destination) = read_sync_request(stream);
    assert_eq!(id, "SEND");
    let mut content = Vec::new();
    loop {
        let id = read_frame_id(stream);
        match &id {
            b"DATA" => {
                let length = read_le_u32(stream) as usize;
                let mut chunk = vec![0_u8; length];
                stream.read_exact(&mut chunk).unwrap();
                content.extend_from_slice(&chunk);
            }
            b"DONE" => {
                let mtime = read_le_u32(stream);
                return (destination, content, mtime);
            }
            other => panic!("unexpected sync frame {other:?} during push"),
        }
    }
}

pub fn send_sync_okay(stream: &mut TcpStream) {
    stream.write_all(b"OKAY").unwrap();
    write_le_u32(stream, 0);
}

pub fn send_sync_fail(stream: &mut TcpStream, message: &str) {
    stream.write_all(b"FAIL").unwrap();
    write_le_u32(stream, message.len() as u32);
    stream.write_all(message.as_bytes()).unwrap();
}

pub fn send_data_chunk(stream: &mut TcpStream, chunk: &[u8]) {
    stream.write_all(b"DATA").unwrap();
    write_le_u32(stream, chunk.len() as u32);
    stream.write_all(chunk).unwrap();
}

pub fn send_transfer_done(stream: &mut TcpStream) {
    stream.write_all(b"DONE").unwrap();
    write_le_u32(stream, 0);
}

/// Writes one 32-bit directory entry frame.
pub fn send_dent(stream: &mut TcpStream, mode: u32, size: u32, mtime: u32, name: &str) {
    stream.write_all(b"DENT").unwrap();
    write_le_u32(stream, mode);
    write_le_u32(stream, size);
    write_le_u32(stream, mtime);
    write_le_u32(stream, name.len() as u32);
    stream.write_all(name.as_bytes()).unwrap();
}

/// Writes one 64-bit directory entry frame.
pub fn send_dent_v2(stream: &mut TcpStream, mode: u64, size: u64, mtime: u64, name: &str) {
    stream.write_all(b"DNT2").unwrap();
    write_le_u64(stream, mode);
    write_le_u64(stream, size);
    write_le_u64(stream, mtime);
    write_le_u32(stream, name.len() as u32);
    stream.write_all(name.as_bytes()).unwrap();
}

/// Terminates a directory listing. Real servers zero-fill the entry fields
/// of the final frame; they are written here too, and the client is expected
/// to stop at the id without consuming them.
pub fn send_listing_done(stream: &mut TcpStream) {
    stream.write_all(b"DONE").unwrap();
    stream.write_all(&[0_u8; 16]).unwrap();
}
