//! Prepared-statement parameter serialization.

use std::io::Write;

use crate::error::Result;
use crate::geometry::{self, Geometry};
use crate::protocol::value::Datetime;
use crate::protocol::writer::PacketWriter;

/// Marker byte preceding a parameter payload.
const MARKER_VALUE: u8 = 0x00;
/// Marker byte for a NULL parameter; no payload follows.
const MARKER_NULL: u8 = 0x01;

/// One bound parameter, resolved by the caller into a closed set of wire
/// shapes before serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Double(f64),
    Datetime(Datetime),
    Bytes(Vec<u8>),
    /// Pre-rendered SQL expression text
    SqlText(String),
    Geometry(Geometry),
    Json(serde_json::Value),
    Text(String),
    Null,
}

/// Serialize one parameter value onto the writer.
///
/// Returns whether any write flushed the writer's internal buffer, so callers
/// can pace downstream I/O. Numbers are normalized to their decimal-text
/// rendering (the server re-parses them); a geometry that fails to encode
/// degrades to a NULL marker instead of raising.
pub fn write_param<W: Write>(out: &mut PacketWriter<W>, value: &ParamValue) -> Result<bool> {
    let mut flushed;
    match value {
        ParamValue::Bool(value) => {
            flushed = out.write_int8(MARKER_VALUE)?;
            flushed = out.write_int8(u8::from(*value))? || flushed;
        }
        ParamValue::Int(value) => {
            flushed = out.write_int8(MARKER_VALUE)?;
            flushed = out.write_lenenc_str_ascii(&value.to_string())? || flushed;
        }
        ParamValue::UInt(value) => {
            flushed = out.write_int8(MARKER_VALUE)?;
            flushed = out.write_lenenc_str_ascii(&value.to_string())? || flushed;
        }
        ParamValue::Double(value) => {
            flushed = out.write_int8(MARKER_VALUE)?;
            flushed = out.write_lenenc_str_ascii(&value.to_string())? || flushed;
        }
        ParamValue::Datetime(value) => {
            flushed = out.write_int8(MARKER_VALUE)?;
            flushed = out.write_binary_datetime(value)? || flushed;
        }
        ParamValue::Bytes(value) => {
            flushed = out.write_int8(MARKER_VALUE)?;
            flushed = out.write_lenenc_buffer(value)? || flushed;
        }
        ParamValue::SqlText(value) => {
            flushed = out.write_int8(MARKER_VALUE)?;
            flushed = out.write_lenenc_str(value)? || flushed;
        }
        ParamValue::Geometry(value) => match geometry::encode_with_srid(value) {
            Some(buf) => {
                flushed = out.write_int8(MARKER_VALUE)?;
                flushed = out.write_lenenc_buffer(&buf)? || flushed;
            }
            None => {
                flushed = out.write_int8(MARKER_NULL)?;
            }
        },
        ParamValue::Json(value) => {
            flushed = out.write_int8(MARKER_VALUE)?;
            flushed = out.write_lenenc_str(&serde_json::to_string(value)?)? || flushed;
        }
        ParamValue::Text(value) => {
            flushed = out.write_int8(MARKER_VALUE)?;
            flushed = out.write_lenenc_str(value)? || flushed;
        }
        ParamValue::Null => {
            flushed = out.write_int8(MARKER_NULL)?;
        }
    }
    Ok(flushed)
}

// ============================================================================
// Tests
// ============================================================================
