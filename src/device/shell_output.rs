use std::io::{BufReader, Read};
use std::net::TcpStream;

/// Combined stdout/stderr of a `shell:` command.
///
/// Legacy shell transports pass output through a pty, which rewrites `\n`
/// into `\r\n`; this reader undoes that by dropping every `\r` immediately
/// followed by `\n`. A `\r` not followed by `\n` passes through unchanged.
/// Dropping the reader closes the connection.
#[derive(Debug)]
pub struct ShellOutput {
    inner: CrlfFilter<BufReader<TcpStream>>,
}

impl ShellOutput {
    pub(crate) fn new(stream: TcpStream) -> Self {
        Self {
            inner: CrlfFilter::new(BufReader::new(stream)),
        }
    }
}

impl Read for ShellOutput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

const SCRATCH_SIZE: usize = 8 * 1024;

/// Drops every 0x0D byte directly preceding a 0x0A.
///
/// Each call performs at most one read on the inner stream once it has
/// produced output, so streaming sources are delivered as they arrive.
#[derive(Debug)]
pub(crate) struct CrlfFilter<R: Read> {
    inner: R,
    // carriage return consumed from `inner` but not yet classified
    pending_cr: bool,
    // output byte that did not fit the caller's buffer
    carry: Option<u8>,
    eof: bool,
}

impl<R: Read> CrlfFilter<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            pending_cr: false,
            carry: None,
            eof: false,
        }
    }

    fn emit(&mut self, buf: &mut [u8], written: usize, byte: u8) -> usize {
        if written < buf.len() {
            buf[written] = byte;
            written + 1
        } else {
            debug_assert!(self.carry.is_none());
            self.carry = Some(byte);
            written
        }
    }
}

impl<R: Read> Read for CrlfFilter<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let mut written = 0;
        if let Some(byte) = self.carry.take() {
            buf[written] = byte;
            written += 1;
        }
        let mut scratch = [0_u8; SCRATCH_SIZE];
        while written == 0 && !self.eof {
            // keep one slot free: a pending \r can turn n input bytes into n+1
            let want = scratch.len().min((buf.len() - written).max(2) - 1);
            let read = match self.inner.read(&mut scratch[..want]) {
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if read == 0 {
                self.eof = true;
                if self.pending_cr {
                    // stream ended on a bare carriage return; emit it
                    self.pending_cr = false;
                    buf[written] = b'\r';
                    written += 1;
                }
                break;
            }
            for &byte in &scratch[..read] {
                match (self.pending_cr, byte) {
                    (false, b'\r') => self.pending_cr = true,
                    (false, other) => {
                        written = self.emit(buf, written, other);
                    }
                    (true, b'\n') => {
                        self.pending_cr = false;
                        written = self.emit(buf, written, b'\n');
                    }
                    (true, b'\r') => {
                        // previous \r was bare; the new one may still pair up
                        written = self.emit(buf, written, b'\r');
                    }
                    (true, other) => {
                        self.pending_cr = false;
                        written = self.emit(buf, written, b'\r');
                        written = self.emit(buf, written, other);
                    }
                }
            }
        }
        Ok(written)
    }
}
