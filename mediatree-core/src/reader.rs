//! Synchronous random-access reader over a seekable byte source.
//!
//! All multi-byte fields in both BMFF and EBML are big-endian, so only
//! big-endian fixed-width helpers are provided. There is deliberately no
//! buffering layer: the engines read in file order and the occasional peek
//! restores the position itself.

use crate::error::{Error, Result};
use std::io::{Read, Seek, SeekFrom};

/// A positioned reader with the fixed-width and slice primitives the tree
/// engines are written against.
#[derive(Debug)]
pub struct Reader<R> {
    inner: R,
    len: u64,
}

impl<R: Read + Seek> Reader<R> {
    /// Wrap an already-open byte source, caching its total length.
    pub fn new(mut inner: R) -> Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { inner, len })
    }

    /// Total length of the source in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the source is zero bytes long.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current read position.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Move the read position to an absolute offset.
    pub fn set_position(&mut self, pos: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// Consume the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => Ok(buf),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                let offset = self.position().unwrap_or(self.len);
                Err(Error::FileEndedEarly { offset })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Read one byte and restore the position.
    pub fn peek_u8(&mut self) -> Result<u8> {
        let pos = self.position()?;
        let byte = self.read_u8()?;
        self.set_position(pos)?;
        Ok(byte)
    }

    /// Read a big-endian u16.
    pub fn read_u16_be(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Read a big-endian u32.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Read a big-endian u64.
    pub fn read_u64_be(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    /// Read a big-endian u32 and restore the position.
    pub fn peek_u32_be(&mut self) -> Result<u32> {
        let pos = self.position()?;
        let value = self.read_u32_be()?;
        self.set_position(pos)?;
        Ok(value)
    }

    /// Read exactly four bytes, the width of a FourCC.
    pub fn read_four(&mut self) -> Result<[u8; 4]> {
        self.read_array()
    }

    /// Read exactly sixteen bytes, the width of a UUID.
    pub fn read_sixteen(&mut self) -> Result<[u8; 16]> {
        self.read_array()
    }

    /// Read `n` bytes into an owned vector.
    ///
    /// End-of-file on the terminal read returns the short vector instead of
    /// an error; callers that need the full width check the length. Hitting
    /// EOF with nothing read at all is a truncation error.
    pub fn read_vec(&mut self, n: u64) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n as usize];
        let mut filled = 0usize;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(got) => filled += got,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        if filled == 0 && n > 0 {
            let offset = self.position().unwrap_or(self.len);
            return Err(Error::FileEndedEarly { offset });
        }
        buf.truncate(filled);
        Ok(buf)
    }
}
