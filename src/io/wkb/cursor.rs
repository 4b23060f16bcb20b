//! Positioned, byte-order-aware access to a single encode or decode buffer.

use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult, EncodeResult};
use crate::io::wkb::common::{NATIVE_LITTLE_ENDIAN, NATIVE_MARKER};

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = DecodeError;

    /// Parse a standard-dialect byte order marker.
    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(DecodeError::InvalidByteOrder(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// Reads from a borrowed buffer.
///
/// The byte order is unknown until [ReadCursor::read_header_byte] or
/// [ReadCursor::set_byte_order] establishes it; multi-byte reads fail until then.
#[derive(Debug, Clone)]
pub struct ReadCursor<'a> {
    reader: Cursor<&'a [u8]>,
    byte_order: Option<Endianness>,
}

macro_rules! read_ordered {
    ($self:ident, $method:ident, $width:expr) => {{
        let order = $self.byte_order.ok_or(DecodeError::ByteOrderUnknown)?;
        let position = $self.position();
        let value = match order {
            Endianness::BigEndian => $self.reader.$method::<BigEndian>(),
            Endianness::LittleEndian => $self.reader.$method::<LittleEndian>(),
        };
        value.map_err(|_| DecodeError::Truncated {
            position,
            needed: $width,
        })
    }};
}

impl<'a> ReadCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            reader: Cursor::new(buf),
            byte_order: None,
        }
    }

    pub fn position(&self) -> u64 {
        self.reader.position()
    }

    /// The number of unread bytes.
    pub fn remaining(&self) -> u64 {
        (self.reader.get_ref().len() as u64).saturating_sub(self.position())
    }

    pub fn byte_order(&self) -> Option<Endianness> {
        self.byte_order
    }

    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.byte_order = Some(byte_order);
    }

    /// Rewind exactly one byte, undoing a one-byte lookahead.
    pub fn push_back(&mut self) {
        let position = self.position().saturating_sub(1);
        self.reader.set_position(position);
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        let position = self.position();
        self.reader
            .read_u8()
            .map_err(|_| DecodeError::Truncated {
                position,
                needed: 1,
            })
    }

    /// Read the first byte of a header and report whether it introduces the native dialect.
    ///
    /// For the native dialect this also establishes the byte order: once the marker bit is
    /// removed, [NATIVE_LITTLE_ENDIAN] means little-endian and anything else big-endian. For the
    /// standard dialects the byte order is left untouched; the caller pushes the byte back and
    /// reads it as a standard byte order marker.
    pub fn read_header_byte(&mut self) -> DecodeResult<bool> {
        let byte = self.read_u8()?;
        let is_native = byte & NATIVE_MARKER != 0;
        if is_native {
            let byte_order = if byte & !NATIVE_MARKER == NATIVE_LITTLE_ENDIAN {
                Endianness::LittleEndian
            } else {
                Endianness::BigEndian
            };
            self.set_byte_order(byte_order);
        }
        Ok(is_native)
    }

    pub fn read_i16(&mut self) -> DecodeResult<i16> {
        read_ordered!(self, read_i16, 2)
    }

    pub fn read_i32(&mut self) -> DecodeResult<i32> {
        read_ordered!(self, read_i32, 4)
    }

    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        read_ordered!(self, read_u32, 4)
    }

    pub fn read_i64(&mut self) -> DecodeResult<i64> {
        read_ordered!(self, read_i64, 8)
    }

    /// Read an IEEE-754 double through the 64-bit integer path.
    pub fn read_f64(&mut self) -> DecodeResult<f64> {
        let bits: u64 = read_ordered!(self, read_u64, 8)?;
        Ok(f64::from_bits(bits))
    }
}

/// Writes into a buffer of fixed length, allocated up front.
///
/// Writing past the end of the buffer fails; the buffer never grows.
#[derive(Debug)]
pub struct WriteCursor {
    writer: Cursor<Box<[u8]>>,
    byte_order: Endianness,
}

macro_rules! write_ordered {
    ($self:ident, $method:ident, $value:expr) => {{
        match $self.byte_order {
            Endianness::BigEndian => $self.writer.$method::<BigEndian>($value)?,
            Endianness::LittleEndian => $self.writer.$method::<LittleEndian>($value)?,
        };
        Ok(())
    }};
}

impl WriteCursor {
    /// Allocate exactly `len` zeroed bytes.
    pub fn with_len(len: usize, byte_order: Endianness) -> Self {
        Self {
            writer: Cursor::new(vec![0; len].into_boxed_slice()),
            byte_order,
        }
    }

    pub fn position(&self) -> usize {
        self.writer.position() as usize
    }

    /// The length of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.writer.get_ref().len()
    }

    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    pub fn write_u8(&mut self, value: u8) -> EncodeResult<()> {
        self.writer.write_u8(value)?;
        Ok(())
    }

    pub fn write_i16(&mut self, value: i16) -> EncodeResult<()> {
        write_ordered!(self, write_i16, value)
    }

    pub fn write_i32(&mut self, value: i32) -> EncodeResult<()> {
        write_ordered!(self, write_i32, value)
    }

    pub fn write_u32(&mut self, value: u32) -> EncodeResult<()> {
        write_ordered!(self, write_u32, value)
    }

    pub fn write_i64(&mut self, value: i64) -> EncodeResult<()> {
        write_ordered!(self, write_i64, value)
    }

    /// Write an IEEE-754 double through the 64-bit integer path.
    pub fn write_f64(&mut self, value: f64) -> EncodeResult<()> {
        write_ordered!(self, write_u64, value.to_bits())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.writer.into_inner().into_vec()
    }
}
