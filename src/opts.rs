use std::sync::Arc;

use crate::col::ColumnDescriptor;
use crate::error::Result;
use crate::protocol::value::{DefaultDecode, Value};

/// User-supplied cast hook, consulted once per cell.
///
/// The hook receives the column metadata and a single-use [`DefaultDecode`]
/// thunk. Dropping the thunk skips the default decode entirely (no packet
/// bytes are consumed); calling [`DefaultDecode::decode`] performs it. The
/// thunk is consumed by `decode`, so it cannot run more than once.
pub type TypeCast =
    Arc<dyn Fn(&ColumnDescriptor, DefaultDecode<'_, '_>) -> Result<Value> + Send + Sync>;

/// A configuration for decoding result-set values
///
/// ```rs
/// let mut opts = Opts::default();
/// opts.support_big_numbers = true;
/// ```
#[derive(Clone, Default)]
pub struct Opts {
    /// Decode DECIMAL/NEWDECIMAL columns into an arbitrary-precision value
    /// instead of a native double
    pub support_big_numbers: bool,

    /// Together with `support_big_numbers`, keep DECIMAL/NEWDECIMAL columns
    /// as their exact server-sent text
    pub big_number_strings: bool,

    /// Per-cell cast hook; `None` means every cell takes the default decode
    pub type_cast: Option<TypeCast>,
}

impl std::fmt::Debug for Opts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Opts")
            .field("support_big_numbers", &self.support_big_numbers)
            .field("big_number_strings", &self.big_number_strings)
            .field("type_cast", &self.type_cast.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
