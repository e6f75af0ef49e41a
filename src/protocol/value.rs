//! Binary protocol value decoding: per-type cell reads, the NULL bitmap, and
//! the user cast hook.

use crate::col::ColumnDescriptor;
use crate::constant::ColumnType;
use crate::error::{Error, Result, eyre};
use crate::geometry::{self, Geometry};
use crate::opts::Opts;
use crate::protocol::packet::PacketReader;
use zerocopy::byteorder::little_endian::{U16 as U16LE, U32 as U32LE};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// One decoded cell. Rows own their values; nothing borrows from the packet.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    /// TINYINT, SMALLINT, INT, BIGINT
    SignedInt(i64),
    /// TINYINT UNSIGNED, SMALLINT UNSIGNED, INT UNSIGNED, BIGINT UNSIGNED
    UnsignedInt(u64),
    /// FLOAT - 4-byte floating point
    Float(f32),
    /// DOUBLE - 8-byte floating point
    Double(f64),
    /// DECIMAL/NEWDECIMAL under `support_big_numbers`
    Decimal(rust_decimal::Decimal),
    /// DATE/DATETIME/TIMESTAMP
    Datetime(Datetime),
    /// TIME
    Time(TimeValue),
    Text(String),
    Bytes(Vec<u8>),
    /// SET column, split on `,`
    Set(Vec<String>),
    Json(serde_json::Value),
    Geometry(Geometry),
}

/// A wall-clock DATE/DATETIME/TIMESTAMP value. The all-zero value is the
/// server's `0000-00-00 00:00:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Datetime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
}

impl Datetime {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// A TIME duration value (up to ~839 hours, signed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeValue {
    pub negative: bool,
    pub days: u32,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub microseconds: u32,
}

// ============================================================================
// Temporal wire layouts
// ============================================================================

/// DATE - 4 bytes (ymd)
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
struct DatetimeWire4 {
    year: U16LE,
    month: u8,
    day: u8,
}

/// DATETIME/TIMESTAMP - 7 bytes (ymd + hms)
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
struct DatetimeWire7 {
    year: U16LE,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

/// DATETIME/TIMESTAMP - 11 bytes (ymd + hms + microseconds)
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
struct DatetimeWire11 {
    year: U16LE,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: U32LE,
}

/// TIME - 8 bytes (without microseconds)
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
struct TimeWire8 {
    is_negative: u8,
    days: U32LE,
    hour: u8,
    minute: u8,
    second: u8,
}

/// TIME - 12 bytes (with microseconds)
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
struct TimeWire12 {
    is_negative: u8,
    days: U32LE,
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: U32LE,
}

/// Binary DATE/DATETIME/TIMESTAMP: a length byte (0/4/7/11) then components.
fn read_binary_datetime(packet: &mut PacketReader<'_>) -> Result<Datetime> {
    match packet.read_u8()? {
        0 => Ok(Datetime::default()),
        4 => {
            let wire = DatetimeWire4::read_from_bytes(packet.read_buffer(4)?)
                .map_err(|_| Error::InvalidPacket)?;
            Ok(Datetime {
                year: wire.year.get(),
                month: wire.month,
                day: wire.day,
                ..Datetime::default()
            })
        }
        7 => {
            let wire = DatetimeWire7::read_from_bytes(packet.read_buffer(7)?)
                .map_err(|_| Error::InvalidPacket)?;
            Ok(Datetime {
                year: wire.year.get(),
                month: wire.month,
                day: wire.day,
                hour: wire.hour,
                minute: wire.minute,
                second: wire.second,
                microsecond: 0,
            })
        }
        11 => {
            let wire = DatetimeWire11::read_from_bytes(packet.read_buffer(11)?)
                .map_err(|_| Error::InvalidPacket)?;
            Ok(Datetime {
                year: wire.year.get(),
                month: wire.month,
                day: wire.day,
                hour: wire.hour,
                minute: wire.minute,
                second: wire.second,
                microsecond: wire.microsecond.get(),
            })
        }
        len => Err(Error::LibraryBug(eyre!("invalid datetime length: {}", len))),
    }
}

/// Binary TIME: a length byte (0/8/12) then components.
fn read_binary_time(packet: &mut PacketReader<'_>) -> Result<TimeValue> {
    match packet.read_u8()? {
        0 => Ok(TimeValue::default()),
        8 => {
            let wire = TimeWire8::read_from_bytes(packet.read_buffer(8)?)
                .map_err(|_| Error::InvalidPacket)?;
            Ok(TimeValue {
                negative: wire.is_negative != 0,
                days: wire.days.get(),
                hours: wire.hour,
                minutes: wire.minute,
                seconds: wire.second,
                microseconds: 0,
            })
        }
        12 => {
            let wire = TimeWire12::read_from_bytes(packet.read_buffer(12)?)
                .map_err(|_| Error::InvalidPacket)?;
            Ok(TimeValue {
                negative: wire.is_negative != 0,
                days: wire.days.get(),
                hours: wire.hour,
                minutes: wire.minute,
                seconds: wire.second,
                microseconds: wire.microsecond.get(),
            })
        }
        len => Err(Error::LibraryBug(eyre!("invalid time length: {}", len))),
    }
}

/// DECIMAL/NEWDECIMAL travels as length-encoded text; the representation of
/// the decoded value is configuration-driven, not protocol-driven.
fn read_decimal(packet: &mut PacketReader<'_>, opts: &Opts) -> Result<Value> {
    let Some(text) = packet.read_str_lenenc()? else {
        return Ok(Value::Null);
    };
    if opts.support_big_numbers && opts.big_number_strings {
        return Ok(Value::Text(text.to_owned()));
    }
    if opts.support_big_numbers {
        // Out-of-range for rust_decimal keeps the exact text rather than
        // rounding through a double.
        return Ok(text
            .parse::<rust_decimal::Decimal>()
            .map_or_else(|_| Value::Text(text.to_owned()), Value::Decimal));
    }
    text.parse::<f64>()
        .map(Value::Double)
        .map_err(|_| Error::InvalidPacket)
}

/// GEOMETRY: length-encoded buffer of 4 SRID bytes + WKB body.
fn read_geometry(packet: &mut PacketReader<'_>) -> Result<Value> {
    let Some(buf) = packet.read_buffer_lenenc()? else {
        return Ok(Value::Null);
    };
    if buf.is_empty() {
        return Ok(Value::Null);
    }
    let body = buf.get(4..).ok_or(Error::InvalidPacket)?;
    match geometry::decode(body)? {
        Some(geom) => Ok(Value::Geometry(geom)),
        None => Ok(Value::Null),
    }
}

// ============================================================================
// NULL Bitmap
// ============================================================================

/// Size in bytes of a binary result-row NULL bitmap.
pub fn bitmap_len(column_count: usize) -> usize {
    (column_count + 7 + 2).div_ceil(8)
}

/// Bitmap position of a result-set column: the first two bits are reserved,
/// giving bit `(index + 2) % 8` of byte `1 + (index + 2) / 8`.
fn bitmap_bit_for_column_index(index: usize) -> (usize, u8) {
    (1 + (index + 2) / 8, ((index + 2) % 8) as u8)
}

/// NULL bitmap of a binary result-set row (1 = NULL, 0 = value present).
#[derive(Debug, Clone, Copy)]
pub struct NullBitmap<'a> {
    bitmap: &'a [u8],
}

impl<'a> NullBitmap<'a> {
    pub fn new(bitmap: &'a [u8]) -> Self {
        Self { bitmap }
    }

    /// Whether the column at `index` is NULL. Positions past the end of the
    /// bitmap read as not-NULL.
    pub fn is_null(&self, index: usize) -> bool {
        let (byte, bit) = bitmap_bit_for_column_index(index);
        match self.bitmap.get(byte) {
            Some(flags) => (flags & (1 << bit)) != 0,
            None => false,
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bitmap
    }
}

// ============================================================================
// Cell decoding
// ============================================================================

/// Decode one cell at `index` according to its column metadata.
///
/// A NULL bit in the bitmap short-circuits without consuming packet bytes;
/// the protocol omits NULL payloads entirely. Shapes without a bitmap pass
/// `None` and rely on length-encoded NULL markers instead.
pub fn read_row_data(
    index: usize,
    column: &ColumnDescriptor,
    opts: &Opts,
    packet: &mut PacketReader<'_>,
    null_bitmap: Option<NullBitmap<'_>>,
) -> Result<Value> {
    if null_bitmap.is_some_and(|bitmap| bitmap.is_null(index)) {
        return Ok(Value::Null);
    }
    match column.column_type {
        ColumnType::MYSQL_TYPE_DOUBLE => Ok(Value::Double(packet.read_f64()?)),
        ColumnType::MYSQL_TYPE_FLOAT => Ok(Value::Float(packet.read_f32()?)),

        ColumnType::MYSQL_TYPE_LONGLONG => {
            if column.is_unsigned() {
                Ok(Value::UnsignedInt(packet.read_u64()?))
            } else {
                Ok(Value::SignedInt(packet.read_i64()?))
            }
        }

        ColumnType::MYSQL_TYPE_INT24 | ColumnType::MYSQL_TYPE_LONG => {
            if column.is_unsigned() {
                Ok(Value::UnsignedInt(u64::from(packet.read_u32()?)))
            } else {
                Ok(Value::SignedInt(i64::from(packet.read_i32()?)))
            }
        }

        ColumnType::MYSQL_TYPE_SHORT | ColumnType::MYSQL_TYPE_YEAR => {
            if column.is_unsigned() {
                Ok(Value::UnsignedInt(u64::from(packet.read_u16()?)))
            } else {
                Ok(Value::SignedInt(i64::from(packet.read_i16()?)))
            }
        }

        ColumnType::MYSQL_TYPE_TINY => {
            if column.is_unsigned() {
                Ok(Value::UnsignedInt(u64::from(packet.read_u8()?)))
            } else {
                Ok(Value::SignedInt(i64::from(packet.read_i8()?)))
            }
        }

        ColumnType::MYSQL_TYPE_DECIMAL | ColumnType::MYSQL_TYPE_NEWDECIMAL => {
            read_decimal(packet, opts)
        }

        ColumnType::MYSQL_TYPE_DATE
        | ColumnType::MYSQL_TYPE_DATETIME
        | ColumnType::MYSQL_TYPE_TIMESTAMP
        | ColumnType::MYSQL_TYPE_NEWDATE
        | ColumnType::MYSQL_TYPE_DATETIME2
        | ColumnType::MYSQL_TYPE_TIMESTAMP2 => Ok(Value::Datetime(read_binary_datetime(packet)?)),

        ColumnType::MYSQL_TYPE_TIME | ColumnType::MYSQL_TYPE_TIME2 => {
            Ok(Value::Time(read_binary_time(packet)?))
        }

        ColumnType::MYSQL_TYPE_GEOMETRY => read_geometry(packet),

        // JSON is transmitted as text even in the binary protocol.
        ColumnType::MYSQL_TYPE_JSON => match packet.read_str_lenenc()? {
            Some(text) => Ok(Value::Json(serde_json::from_str(text)?)),
            None => Ok(Value::Null),
        },

        // Everything else (VARCHAR/STRING/BLOB/ENUM/SET/BIT/..) is a
        // length-encoded string or buffer depending on the collation.
        _ => {
            if column.is_binary_collation() {
                return match packet.read_buffer_lenenc()? {
                    Some(bytes) => Ok(Value::Bytes(bytes.to_vec())),
                    None => Ok(Value::Null),
                };
            }
            let text = packet.read_str_lenenc()?;
            if column.has_set_flag() {
                return Ok(match text {
                    None => Value::Null,
                    Some("") => Value::Set(Vec::new()),
                    Some(text) => Value::Set(text.split(',').map(str::to_owned).collect()),
                });
            }
            Ok(match text {
                Some(text) => Value::Text(text.to_owned()),
                None => Value::Null,
            })
        }
    }
}

/// The deferred default decode handed to a cast hook.
///
/// Consuming [`decode`](Self::decode) runs the default cell decode exactly
/// once; dropping the thunk instead skips it, in which case no packet bytes
/// are consumed for this cell.
pub struct DefaultDecode<'r, 'a> {
    index: usize,
    column: &'r ColumnDescriptor,
    opts: &'r Opts,
    packet: &'r mut PacketReader<'a>,
    null_bitmap: Option<NullBitmap<'a>>,
}

impl DefaultDecode<'_, '_> {
    pub fn decode(self) -> Result<Value> {
        read_row_data(
            self.index,
            self.column,
            self.opts,
            self.packet,
            self.null_bitmap,
        )
    }
}

/// Decode one cell, routing through the cast hook when one is configured.
pub fn read_cell<'a>(
    index: usize,
    column: &ColumnDescriptor,
    opts: &Opts,
    packet: &mut PacketReader<'a>,
    null_bitmap: Option<NullBitmap<'a>>,
) -> Result<Value> {
    match &opts.type_cast {
        Some(cast) => cast(
            column,
            DefaultDecode {
                index,
                column,
                opts,
                packet,
                null_bitmap,
            },
        ),
        None => read_row_data(index, column, opts, packet, null_bitmap),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::ColumnFlags;
    use std::sync::Arc;

    fn col(column_type: ColumnType, flags: ColumnFlags) -> ColumnDescriptor {
        ColumnDescriptor::new(column_type, flags, 33, 0)
    }

    fn decode_one(column: &ColumnDescriptor, data: &[u8]) -> Value {
        let mut packet = PacketReader::new(data);
        read_row_data(0, column, &Opts::default(), &mut packet, None).unwrap()
    }

    #[test]
    fn signed_integers() {
        let value = decode_one(&col(ColumnType::MYSQL_TYPE_TINY, ColumnFlags::empty()), &[214]);
        assert_eq!(value, Value::SignedInt(-42));

        let value = decode_one(
            &col(ColumnType::MYSQL_TYPE_SHORT, ColumnFlags::empty()),
            &(-1000i16).to_le_bytes(),
        );
        assert_eq!(value, Value::SignedInt(-1000));

        let value = decode_one(
            &col(ColumnType::MYSQL_TYPE_LONG, ColumnFlags::empty()),
            &(-100_000i32).to_le_bytes(),
        );
        assert_eq!(value, Value::SignedInt(-100_000));

        let value = decode_one(
            &col(ColumnType::MYSQL_TYPE_LONGLONG, ColumnFlags::empty()),
            &(-5_000_000_000i64).to_le_bytes(),
        );
        assert_eq!(value, Value::SignedInt(-5_000_000_000));
    }

    #[test]
    fn unsigned_integers() {
        let value = decode_one(
            &col(ColumnType::MYSQL_TYPE_TINY, ColumnFlags::UNSIGNED_FLAG),
            &[200],
        );
        assert_eq!(value, Value::UnsignedInt(200));

        let value = decode_one(
            &col(ColumnType::MYSQL_TYPE_YEAR, ColumnFlags::UNSIGNED_FLAG),
            &2024u16.to_le_bytes(),
        );
        assert_eq!(value, Value::UnsignedInt(2024));

        let value = decode_one(
            &col(ColumnType::MYSQL_TYPE_LONGLONG, ColumnFlags::UNSIGNED_FLAG),
            &u64::MAX.to_le_bytes(),
        );
        assert_eq!(value, Value::UnsignedInt(u64::MAX));
    }

    #[test]
    fn float_and_double() {
        let value = decode_one(
            &col(ColumnType::MYSQL_TYPE_FLOAT, ColumnFlags::empty()),
            &3.5f32.to_le_bytes(),
        );
        assert_eq!(value, Value::Float(3.5));

        let value = decode_one(
            &col(ColumnType::MYSQL_TYPE_DOUBLE, ColumnFlags::empty()),
            &std::f64::consts::PI.to_le_bytes(),
        );
        assert_eq!(value, Value::Double(std::f64::consts::PI));
    }

    #[test]
    fn datetime_lengths() {
        let column = col(ColumnType::MYSQL_TYPE_DATETIME, ColumnFlags::empty());

        assert_eq!(decode_one(&column, &[0]), Value::Datetime(Datetime::default()));

        let mut data = vec![4u8];
        data.extend_from_slice(&2024u16.to_le_bytes());
        data.extend_from_slice(&[12, 25]);
        let expected = Datetime {
            year: 2024,
            month: 12,
            day: 25,
            ..Datetime::default()
        };
        assert_eq!(decode_one(&column, &data), Value::Datetime(expected));

        let mut data = vec![11u8];
        data.extend_from_slice(&2024u16.to_le_bytes());
        data.extend_from_slice(&[12, 25, 15, 30, 45]);
        data.extend_from_slice(&123_456u32.to_le_bytes());
        let expected = Datetime {
            year: 2024,
            month: 12,
            day: 25,
            hour: 15,
            minute: 30,
            second: 45,
            microsecond: 123_456,
        };
        assert_eq!(decode_one(&column, &data), Value::Datetime(expected));

        let mut packet = PacketReader::new(&[5u8, 0, 0, 0, 0, 0]);
        let result = read_row_data(0, &column, &Opts::default(), &mut packet, None);
        assert!(matches!(result, Err(Error::LibraryBug(_))));
    }

    #[test]
    fn time_lengths() {
        let column = col(ColumnType::MYSQL_TYPE_TIME, ColumnFlags::empty());

        assert_eq!(decode_one(&column, &[0]), Value::Time(TimeValue::default()));

        let mut data = vec![12u8, 1];
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&[12, 30, 45]);
        data.extend_from_slice(&7u32.to_le_bytes());
        let expected = TimeValue {
            negative: true,
            days: 2,
            hours: 12,
            minutes: 30,
            seconds: 45,
            microseconds: 7,
        };
        assert_eq!(decode_one(&column, &data), Value::Time(expected));
    }

    #[test]
    fn decimal_representation_follows_options() {
        let column = col(ColumnType::MYSQL_TYPE_NEWDECIMAL, ColumnFlags::empty());
        let mut data = vec![7u8];
        data.extend_from_slice(b"123.450");

        let mut packet = PacketReader::new(&data);
        let value = read_row_data(0, &column, &Opts::default(), &mut packet, None).unwrap();
        assert_eq!(value, Value::Double(123.45));

        let opts = Opts {
            support_big_numbers: true,
            ..Opts::default()
        };
        let mut packet = PacketReader::new(&data);
        let value = read_row_data(0, &column, &opts, &mut packet, None).unwrap();
        assert_eq!(
            value,
            Value::Decimal("123.450".parse::<rust_decimal::Decimal>().unwrap())
        );

        let opts = Opts {
            support_big_numbers: true,
            big_number_strings: true,
            ..Opts::default()
        };
        let mut packet = PacketReader::new(&data);
        let value = read_row_data(0, &column, &opts, &mut packet, None).unwrap();
        assert_eq!(value, Value::Text("123.450".to_owned()));
    }

    #[test]
    fn set_column_splits_on_comma() {
        let column = ColumnDescriptor::new(
            ColumnType::MYSQL_TYPE_STRING,
            ColumnFlags::SET_FLAG,
            33,
            0,
        );

        let mut data = vec![5u8];
        data.extend_from_slice(b"a,b,c");
        assert_eq!(
            decode_one(&column, &data),
            Value::Set(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()])
        );

        assert_eq!(decode_one(&column, &[0]), Value::Set(Vec::new()));
        assert_eq!(decode_one(&column, &[0xFB]), Value::Null);
    }

    #[test]
    fn binary_collation_yields_bytes() {
        let column = ColumnDescriptor::new(
            ColumnType::MYSQL_TYPE_BLOB,
            ColumnFlags::empty(),
            crate::constant::BINARY_COLLATION,
            0,
        );
        let value = decode_one(&column, &[4, 0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(value, Value::Bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]));
    }

    #[test]
    fn json_column_parses_text() {
        let column = col(ColumnType::MYSQL_TYPE_JSON, ColumnFlags::empty());
        let mut data = vec![13u8];
        data.extend_from_slice(b"{\"answer\":42}");
        assert_eq!(
            decode_one(&column, &data),
            Value::Json(serde_json::json!({"answer": 42}))
        );

        let mut packet = PacketReader::new(&[3u8, b'{', b'4', b'2']);
        let result = read_row_data(0, &column, &Opts::default(), &mut packet, None);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn geometry_column_roundtrip() {
        use crate::geometry::Point;

        let column = col(ColumnType::MYSQL_TYPE_GEOMETRY, ColumnFlags::empty());
        let body = geometry::encode_with_srid(&Geometry::Point(Point::new(1.0, 2.0))).unwrap();
        let mut data = vec![body.len() as u8];
        data.extend_from_slice(&body);
        assert_eq!(
            decode_one(&column, &data),
            Value::Geometry(Geometry::Point(Point::new(1.0, 2.0)))
        );

        // empty payload decodes as NULL
        assert_eq!(decode_one(&column, &[0]), Value::Null);
    }

    #[test]
    fn null_bitmap_addressing() {
        // 1 column: 2 bitmap bytes, column 0 lives at byte 1 bit 2
        assert_eq!(bitmap_len(1), 2);
        let bitmap_bytes = [0u8, 0b0000_0100];
        let bitmap = NullBitmap::new(&bitmap_bytes);
        assert!(bitmap.is_null(0));

        let bitmap_bytes = [0u8, 0];
        let bitmap = NullBitmap::new(&bitmap_bytes);
        assert!(!bitmap.is_null(0));

        // out-of-range positions read as not-NULL
        assert!(!bitmap.is_null(100));
    }

    #[test]
    fn null_bit_consumes_no_payload() {
        let column = col(ColumnType::MYSQL_TYPE_LONG, ColumnFlags::empty());
        let bitmap_bytes = [0u8, 0b0000_0100];
        let bitmap = NullBitmap::new(&bitmap_bytes);

        let mut packet = PacketReader::new(&[]);
        let value =
            read_row_data(0, &column, &Opts::default(), &mut packet, Some(bitmap)).unwrap();
        assert_eq!(value, Value::Null);
        assert_eq!(packet.remaining(), 0);
    }

    #[test]
    fn cast_hook_overrides_without_consuming() {
        let column = col(ColumnType::MYSQL_TYPE_LONG, ColumnFlags::empty());
        let opts = Opts {
            type_cast: Some(Arc::new(|_, _default| Ok(Value::Text("cast".to_owned())))),
            ..Opts::default()
        };

        let data = 7i32.to_le_bytes();
        let mut packet = PacketReader::new(&data);
        let value = read_cell(0, &column, &opts, &mut packet, None).unwrap();
        assert_eq!(value, Value::Text("cast".to_owned()));
        // the hook dropped the thunk: the cell bytes were never touched
        assert_eq!(packet.remaining(), 4);
    }

    #[test]
    fn cast_hook_can_request_the_default() {
        let column = col(ColumnType::MYSQL_TYPE_LONG, ColumnFlags::empty());
        let opts = Opts {
            type_cast: Some(Arc::new(|_, default| {
                match default.decode()? {
                    Value::SignedInt(v) => Ok(Value::SignedInt(v * 2)),
                    other => Ok(other),
                }
            })),
            ..Opts::default()
        };

        let data = 21i32.to_le_bytes();
        let mut packet = PacketReader::new(&data);
        let value = read_cell(0, &column, &opts, &mut packet, None).unwrap();
        assert_eq!(value, Value::SignedInt(42));
        assert_eq!(packet.remaining(), 0);
    }
}
