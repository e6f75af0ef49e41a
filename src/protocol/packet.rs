use crate::error::{Error, Result};
use zerocopy::FromBytes;
use zerocopy::byteorder::little_endian::{U16 as U16LE, U32 as U32LE, U64 as U64LE};

/// Length-encoded integer prefix marking a SQL NULL cell.
const LENENC_NULL: u8 = 0xFB;

/// A cursor over one already-framed packet payload.
///
/// All multi-byte reads are little-endian. Reads past the end of the buffer
/// return [`Error::UnexpectedEof`]; the cursor never panics and never reads
/// outside the payload it was constructed over.
#[derive(Debug)]
pub struct PacketReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PacketReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::UnexpectedEof)?;
        if end > self.data.len() {
            return Err(Error::UnexpectedEof);
        }
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    /// Read a raw byte span of known length.
    pub fn read_buffer(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let value = U16LE::read_from_bytes(self.take(2)?).map_err(|_| Error::InvalidPacket)?;
        Ok(value.get())
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let value = U32LE::read_from_bytes(self.take(4)?).map_err(|_| Error::InvalidPacket)?;
        Ok(value.get())
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let value = U64LE::read_from_bytes(self.take(8)?).map_err(|_| Error::InvalidPacket)?;
        Ok(value.get())
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Read a length-encoded integer (1/3/4/9-byte forms).
    pub fn read_int_lenenc(&mut self) -> Result<u64> {
        match self.read_u8()? {
            0xFC => Ok(u64::from(self.read_u16()?)),
            0xFD => {
                let bytes = self.take(3)?;
                Ok(u64::from(u32::from_le_bytes([
                    bytes[0], bytes[1], bytes[2], 0,
                ])))
            }
            0xFE => self.read_u64(),
            value => Ok(u64::from(value)),
        }
    }

    /// Read a length-encoded byte buffer; the 0xFB marker decodes as SQL NULL.
    pub fn read_buffer_lenenc(&mut self) -> Result<Option<&'a [u8]>> {
        if self.remaining() == 0 {
            return Err(Error::UnexpectedEof);
        }
        if self.data[self.pos] == LENENC_NULL {
            self.pos += 1;
            return Ok(None);
        }
        let len = self.read_int_lenenc()?;
        Ok(Some(self.take(len as usize)?))
    }

    /// Read a length-encoded UTF-8 string; the 0xFB marker decodes as SQL NULL.
    pub fn read_str_lenenc(&mut self) -> Result<Option<&'a str>> {
        match self.read_buffer_lenenc()? {
            Some(bytes) => {
                let text = simdutf8::basic::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)?;
                Ok(Some(text))
            }
            None => Ok(None),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
