//! Byte cursor with endianness-aware primitive reads.

use std::borrow::Cow;

use thiserror::Error;

/// Byte order of multi-byte values, as declared by a definition message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

impl Endian {
    /// Interpret the architecture byte of a definition message.
    pub fn from_architecture(architecture: u8) -> Self {
        if architecture == 1 {
            Self::Big
        } else {
            Self::Little
        }
    }
}

/// Unexpectedly reached the end of the available bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Needed {needed} bytes at offset {offset}, but only {available} remain.")]
pub struct EndOfData {
    pub offset: usize,
    pub needed: usize,
    pub available: usize,
}

/// A primitive which may be read from a cursor in either byte order.
pub trait Primitive: Sized + Copy {
    fn read(cursor: &mut Cursor<'_>, endian: Endian) -> Result<Self, EndOfData>;
}

macro_rules! primitive {
    ($($t:ty),*) => {
        $(
            impl Primitive for $t {
                fn read(cursor: &mut Cursor<'_>, endian: Endian) -> Result<Self, EndOfData> {
                    let r = cursor.take::<{ size_of::<$t>() }>()?;
                    Ok(match endian {
                        Endian::Little => <$t>::from_le_bytes(r),
                        Endian::Big => <$t>::from_be_bytes(r),
                    })
                }
            }
        )*
    };
}

primitive!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// A read position within a slice of bytes.
///
/// Offsets are absolute within the underlying slice, so the cursor may be
/// bounded to a record section while reporting document offsets.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Create a cursor over `bytes`, starting at `offset`.
    pub fn starting_at(bytes: &'a [u8], offset: usize) -> Self {
        Self { bytes, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn bytes_remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// The bytes from the offset to the end.
    pub fn rest(&self) -> &'a [u8] {
        self.bytes.get(self.offset..).unwrap_or_default()
    }

    /// Move to an absolute offset, no further than the end of the bytes.
    pub fn seek(&mut self, offset: usize) {
        self.offset = offset.min(self.bytes.len());
    }

    /// Take an exact number of bytes, advancing the offset.
    pub fn take<const N: usize>(&mut self) -> Result<[u8; N], EndOfData> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.read_bytes(N)?);
        Ok(buf)
    }

    /// Take `n` bytes, advancing the offset.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], EndOfData> {
        let bytes = self
            .bytes
            .get(self.offset..)
            .and_then(|r| r.get(..n))
            .ok_or(EndOfData {
                offset: self.offset,
                needed: n,
                available: self.bytes_remaining(),
            })?;
        self.offset += n;
        Ok(bytes)
    }

    /// Read a primitive in the given byte order.
    pub fn read<T: Primitive>(&mut self, endian: Endian) -> Result<T, EndOfData> {
        T::read(self, endian)
    }

    pub fn read_u8(&mut self) -> Result<u8, EndOfData> {
        self.read(Endian::Little)
    }

    /// Read an `n`-byte string field, ending at the first null byte.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn read_string(&mut self, n: usize) -> Result<Cow<'a, str>, EndOfData> {
        let bytes = self.read_bytes(n)?;
        let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
        Ok(String::from_utf8_lossy(&bytes[..end]))
    }
}
