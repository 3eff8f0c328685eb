use std::io::{Read, Write};
use std::net::TcpStream;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::constants::SYNC_CHUNK_SIZE;
use crate::{RadbError, RemoteFileEntry, Result, SyncCommand};

/// Sync sub-protocol session over an already-handshaken connection.
///
/// Obtained from [`crate::Transport::start_sync`]; dropping it releases the
/// underlying connection.
#[derive(Debug)]
pub struct SyncTransport {
    stream: TcpStream,
}

impl SyncTransport {
    pub(crate) fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Sends a sync request: 4-byte id, little-endian argument length,
    /// argument bytes.
    pub fn send(&mut self, command: SyncCommand, argument: &str) -> Result<()> {
        log::debug!("sync {command} \"{argument}\"");
        self.stream.write_all(command.code())?;
        self.stream
            .write_u32::<LittleEndian>(argument.len() as u32)?;
        self.stream.write_all(argument.as_bytes())?;
        Ok(())
    }

    /// Reads one 32-bit-field directory entry of a `LIST` reply.
    ///
    /// Returns `None` once the terminating `DONE` frame arrives.
    pub fn read_directory_entry(&mut self) -> Result<Option<RemoteFileEntry>> {
        let id = self.read_id()?;
        if &id == SyncCommand::Done.code() {
            return Ok(None);
        }
        if &id != SyncCommand::Dent.code() {
            return Err(unexpected_id(&id));
        }
        let mode = self.stream.read_u32::<LittleEndian>()?;
        let size = self.stream.read_u32::<LittleEndian>()?;
        let last_modified = self.stream.read_u32::<LittleEndian>()?;
        let name = self.read_name()?;
        Ok(Some(RemoteFileEntry::V1 {
            name,
            mode,
            size,
            last_modified,
        }))
    }

    /// Reads one 64-bit-field directory entry of a `LIS2` reply.
    ///
    /// Returns `None` once the terminating `DONE` frame arrives.
    pub fn read_directory_entry_v2(&mut self) -> Result<Option<RemoteFileEntry>> {
        let id = self.read_id()?;
        if &id == SyncCommand::Done.code() {
            return Ok(None);
        }
        if &id != SyncCommand::DentV2.code() {
            return Err(unexpected_id(&id));
        }
        let mode = self.stream.read_u64::<LittleEndian>()?;
        let size = self.stream.read_u64::<LittleEndian>()?;
        let last_modified = self.stream.read_u64::<LittleEndian>()?;
        let name = self.read_name()?;
        Ok(Some(RemoteFileEntry::V2 {
            name,
            mode,
            size,
            last_modified,
        }))
    }

    /// Streams `source` to the server as `DATA` chunks of at most 64 KiB.
    ///
    /// Returns the number of payload bytes sent. An empty source sends no
    /// chunk at all.
    pub fn send_stream<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<u64> {
        let mut chunk = vec![0_u8; SYNC_CHUNK_SIZE];
        let mut total = 0_u64;
        loop {
            let read = source.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            log::trace!("sending DATA chunk of {read} bytes");
            self.stream.write_all(SyncCommand::Data.code())?;
            self.stream.write_u32::<LittleEndian>(read as u32)?;
            self.stream.write_all(&chunk[..read])?;
            total += read as u64;
        }
        Ok(total)
    }

    /// Sends a closing status frame: 4-byte id plus a 32-bit little-endian
    /// value, typically `DONE` with the modification time.
    ///
    /// Timestamps wider than 32 bits are truncated, not rejected, to stay
    /// wire-compatible with older servers.
    pub fn send_status(&mut self, command: SyncCommand, timestamp: u32) -> Result<()> {
        self.stream.write_all(command.code())?;
        self.stream.write_u32::<LittleEndian>(timestamp)?;
        Ok(())
    }

    /// Reads the final status frame of a transfer.
    pub fn verify_status(&mut self) -> Result<()> {
        let id = self.read_id()?;
        // trailing 4 bytes: zero for OKAY, message length for FAIL
        let length = self.stream.read_u32::<LittleEndian>()? as usize;
        if &id == SyncCommand::Okay.code() {
            return Ok(());
        }
        if &id == SyncCommand::Fail.code() {
            return Err(self.read_failure_message(length)?);
        }
        Err(unexpected_id(&id))
    }

    /// Copies `DATA` chunks into `sink` until the `DONE` frame arrives.
    ///
    /// Returns the number of payload bytes written. A `FAIL` frame carries
    /// the server message into the returned error.
    pub fn read_chunks_to<W: Write + ?Sized>(&mut self, sink: &mut W) -> Result<u64> {
        let mut total = 0_u64;
        loop {
            let id = self.read_id()?;
            let length = self.stream.read_u32::<LittleEndian>()? as u64;
            if &id == SyncCommand::Done.code() {
                return Ok(total);
            }
            if &id == SyncCommand::Fail.code() {
                return Err(self.read_failure_message(length as usize)?);
            }
            if &id != SyncCommand::Data.code() {
                return Err(unexpected_id(&id));
            }
            log::trace!("receiving DATA chunk of {length} bytes");
            let copied = std::io::copy(&mut (&mut self.stream).take(length), sink)?;
            if copied != length {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "connection closed inside a DATA chunk",
                )
                .into());
            }
            total += length;
        }
    }

    fn read_id(&mut self) -> Result<[u8; 4]> {
        let mut id = [0_u8; 4];
        self.stream.read_exact(&mut id)?;
        Ok(id)
    }

    fn read_name(&mut self) -> Result<String> {
        let length = self.stream.read_u32::<LittleEndian>()? as usize;
        let mut name = vec![0_u8; length];
        self.stream.read_exact(&mut name)?;
        Ok(String::from_utf8(name)?)
    }

    fn read_failure_message(&mut self, length: usize) -> Result<RadbError> {
        let mut message = vec![0_u8; length];
        self.stream.read_exact(&mut message)?;
        Ok(RadbError::AdbRequestFailed(String::from_utf8(message)?))
    }
}

fn unexpected_id(id: &[u8; 4]) -> RadbError {
    RadbError::UnknownResponseType(String::from_utf8_lossy(id).into_owned())
}
