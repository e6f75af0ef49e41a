pub mod col;
pub mod constant;
pub mod error;
pub mod geometry;
mod opts;
pub mod protocol;

pub use opts::{Opts, TypeCast};
