use std::io::{self, Read, Write};

/// A byte-at-a-time input stream, isomorphic to POSIX `fgetc`.
///
/// This is the Rust mapping of the C original's `hibp_getc_t` callback: the
/// codec (`crate::codec`) is specified purely in terms of this trait, so any
/// byte source — a file, an in-memory buffer, a socket — can back a load.
pub trait Reader {
    /// Read the next byte, or `Err` on EOF or any underlying stream error.
    /// The callback contract this mirrors doesn't distinguish the two.
    fn read_byte(&mut self) -> Result<u8, ()>;

    /// Read exactly `buf.len()` bytes. The default implementation calls
    /// `read_byte` once per byte; implementations backed by a bulk source
    /// (like [`IoReader`]) should override this for performance while
    /// remaining byte-identical.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ()> {
        for slot in buf {
            *slot = self.read_byte()?;
        }
        Ok(())
    }
}

/// A byte-at-a-time output stream, isomorphic to POSIX `fputc`.
pub trait Writer {
    /// Write one byte, `Err` on any underlying stream error.
    fn write_byte(&mut self, b: u8) -> Result<(), ()>;

    /// Write all of `buf`. The default calls `write_byte` once per byte;
    /// bulk-backed implementations (like [`IoWriter`]) should override this.
    fn write_all(&mut self, buf: &[u8]) -> Result<(), ()> {
        for &b in buf {
            self.write_byte(b)?;
        }
        Ok(())
    }
}

/// Adapts any [`std::io::Read`] into a [`Reader`], using block reads
/// (`read_exact`) for performance while remaining byte-identical to the
/// byte-at-a-time contract.
pub struct IoReader<R> {
    inner: R,
    last_error: Option<io::Error>,
}

impl<R: Read> IoReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            last_error: None,
        }
    }

    /// Take the underlying `io::Error`, if the most recent operation failed
    /// because of one (as opposed to a clean EOF).
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }
}

impl<R: Read> Reader for IoReader<R> {
    fn read_byte(&mut self) -> Result<u8, ()> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte).map(|()| byte[0])
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ()> {
        self.inner.read_exact(buf).map_err(|e| {
            self.last_error = Some(e);
        })
    }
}

/// Adapts any [`std::io::Write`] into a [`Writer`].
pub struct IoWriter<W> {
    inner: W,
    last_error: Option<io::Error>,
}

impl<W: Write> IoWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            last_error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }
}

impl<W: Write> Writer for IoWriter<W> {
    fn write_byte(&mut self, b: u8) -> Result<(), ()> {
        self.write_all(&[b])
    }

    fn write_all(&mut self, buf: &[u8]) -> Result<(), ()> {
        self.inner.write_all(buf).map_err(|e| {
            self.last_error = Some(e);
        })
    }
}
