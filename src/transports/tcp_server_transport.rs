use std::io::{Read, Write};
use std::net::{SocketAddrV4, TcpStream};

use crate::constants::MAX_COMMAND_LENGTH;
use crate::models::AdbRequestStatus;
use crate::{RadbError, Result, SyncTransport};

/// One framed request/response exchange with the local ADB server.
///
/// A transport owns exactly one connection. Dropping it releases the
/// connection, so every exit path of an operation, including failures,
/// closes the socket it opened.
#[derive(Debug)]
pub struct Transport {
    stream: TcpStream,
}

impl Transport {
    /// Opens a fresh connection to the ADB server at `addr`.
    pub fn connect(addr: SocketAddrV4) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        log::debug!("connected to ADB server at {addr}");
        Ok(Self { stream })
    }

    /// Sends one command, prefixed with its length as 4 hexadecimal digits.
    ///
    /// Commands longer than 0xFFFF bytes cannot be represented by the prefix;
    /// they are rejected before anything is written to the socket.
    pub fn send(&mut self, command: &str) -> Result<()> {
        if command.len() > MAX_COMMAND_LENGTH {
            return Err(RadbError::CommandTooLong(command.len()));
        }
        log::debug!("sending command \"{command}\"");
        let request = format!("{:04x}{}", command.len(), command);
        self.stream.write_all(request.as_bytes())?;
        Ok(())
    }

    /// Reads the 4-byte status of the last command.
    ///
    /// On `FAIL` the length-prefixed server message follows and is carried
    /// verbatim in the returned error.
    pub fn verify_response(&mut self) -> Result<()> {
        let mut status = [0_u8; 4];
        self.stream.read_exact(&mut status)?;
        log::trace!("received status {status:?}");

        match std::str::from_utf8(&status)?.parse::<AdbRequestStatus>()? {
            AdbRequestStatus::Okay => Ok(()),
            AdbRequestStatus::Fail => {
                let message = self.read_string()?;
                Err(RadbError::AdbRequestFailed(message))
            }
        }
    }

    /// Reads one length-prefixed UTF-8 reply.
    pub fn read_string(&mut self) -> Result<String> {
        let length = self.read_length()?;
        let mut payload = vec![0_u8; length];
        self.stream.read_exact(&mut payload)?;
        Ok(String::from_utf8(payload)?)
    }

    /// Drains everything remaining on the connection into `sink`.
    ///
    /// Only meaningful after a successful [`Transport::verify_response`], when
    /// the server switches to raw output until it closes the connection.
    pub fn read_response_to<W: Write + ?Sized>(&mut self, sink: &mut W) -> Result<u64> {
        Ok(std::io::copy(&mut self.stream, sink)?)
    }

    /// Hands the remaining connection over as a raw byte stream.
    ///
    /// Valid only after a successful response with no further framing, e.g.
    /// for `shell:` and `exec:` output. The returned stream closes the
    /// connection when dropped.
    pub fn into_raw_stream(self) -> TcpStream {
        self.stream
    }

    /// Switches the connection into the sync sub-protocol.
    ///
    /// Sends the literal `sync:` command and verifies its status; the
    /// returned [`SyncTransport`] keeps the same connection, no new one is
    /// opened.
    pub fn start_sync(mut self) -> Result<SyncTransport> {
        self.send("sync:")?;
        self.verify_response()?;
        Ok(SyncTransport::new(self.stream))
    }

    fn read_length(&mut self) -> Result<usize> {
        let mut hex = [0_u8; 4];
        self.stream.read_exact(&mut hex)?;
        Ok(usize::from_str_radix(std::str::from_utf8(&hex)?, 16)?)
    }
}
