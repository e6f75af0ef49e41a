use crate::constant::{BINARY_COLLATION, ColumnFlags, ColumnType};

/// The slice of a result-set column definition the codec consults.
///
/// One per column, resolved by the caller before decoding starts and constant
/// for the duration of the result set. Naming data (table/column aliases) is
/// carried separately by the caller's table header.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub column_type: ColumnType,
    pub flags: ColumnFlags,
    /// Collation index reported by the server; 63 means binary charset.
    pub collation: u16,
    pub decimals: u8,
}

impl ColumnDescriptor {
    pub fn new(column_type: ColumnType, flags: ColumnFlags, collation: u16, decimals: u8) -> Self {
        Self {
            column_type,
            flags,
            collation,
            decimals,
        }
    }

    pub fn is_unsigned(&self) -> bool {
        self.flags.contains(ColumnFlags::UNSIGNED_FLAG)
    }

    pub fn is_binary_collation(&self) -> bool {
        self.collation == BINARY_COLLATION
    }

    pub fn has_set_flag(&self) -> bool {
        self.flags.contains(ColumnFlags::SET_FLAG)
    }
}
