pub mod packet;
pub mod param;
pub mod row;
pub mod value;
pub mod writer;

pub use packet::PacketReader;
pub use param::{ParamValue, write_param};
pub use row::{decode_row_array, decode_row_flat, decode_row_nested, decode_row_text};
pub use value::{Datetime, NullBitmap, TimeValue, Value, bitmap_len, read_cell, read_row_data};
pub use writer::PacketWriter;
