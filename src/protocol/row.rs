//! Result-set row decoding in the three output shapes.
//!
//! The flat shape decodes a full binary-protocol row (header byte + NULL
//! bitmap + cells). The array and nested shapes decode bare cell sequences
//! whose NULLs travel as length-encoded markers; they never read a bitmap.
//! The two paths must stay distinct.

use std::collections::HashMap;

use crate::col::ColumnDescriptor;
use crate::error::{Error, Result};
use crate::opts::Opts;
use crate::protocol::packet::PacketReader;
use crate::protocol::value::{NullBitmap, Value, bitmap_len, read_cell};

/// Decode a row into a positional sequence, one value per column.
pub fn decode_row_array(
    columns: &[ColumnDescriptor],
    packet: &mut PacketReader<'_>,
    opts: &Opts,
) -> Result<Vec<Value>> {
    let mut row = Vec::with_capacity(columns.len());
    for (index, column) in columns.iter().enumerate() {
        row.push(read_cell(index, column, opts, packet, None)?);
    }
    Ok(row)
}

/// Decode a row into a table-qualified two-level map. Per-table maps are
/// created lazily on first use; `header` pairs (table, column) names with
/// each column index.
pub fn decode_row_nested(
    columns: &[ColumnDescriptor],
    header: &[(String, String)],
    packet: &mut PacketReader<'_>,
    opts: &Opts,
) -> Result<HashMap<String, HashMap<String, Value>>> {
    debug_assert_eq!(columns.len(), header.len());
    let mut row: HashMap<String, HashMap<String, Value>> = HashMap::new();
    for (index, (column, (table, name))) in columns.iter().zip(header).enumerate() {
        let value = read_cell(index, column, opts, packet, None)?;
        row.entry(table.clone()).or_default().insert(name.clone(), value);
    }
    Ok(row)
}

/// Decode a binary-protocol row into a flat column-name map.
///
/// Layout: `[0x00 header][NULL bitmap][cell bytes for non-NULL columns]`.
pub fn decode_row_flat(
    columns: &[ColumnDescriptor],
    names: &[String],
    packet: &mut PacketReader<'_>,
    opts: &Opts,
) -> Result<HashMap<String, Value>> {
    debug_assert_eq!(columns.len(), names.len());
    tracing::trace!(columns = columns.len(), "decoding binary row");
    if packet.read_u8()? != 0x00 {
        return Err(Error::InvalidPacket);
    }
    let bitmap = NullBitmap::new(packet.read_buffer(bitmap_len(columns.len()))?);
    let mut row = HashMap::with_capacity(columns.len());
    for (index, (column, name)) in columns.iter().zip(names).enumerate() {
        let value = read_cell(index, column, opts, packet, Some(bitmap))?;
        row.insert(name.clone(), value);
    }
    Ok(row)
}

/// Text-protocol rows are outside this codec.
pub fn decode_row_text(
    _columns: &[ColumnDescriptor],
    _packet: &mut PacketReader<'_>,
    _opts: &Opts,
) -> Result<Vec<Value>> {
    Err(Error::Unsupported("text protocol row decode"))
}

// ============================================================================
// Tests
// ============================================================================
