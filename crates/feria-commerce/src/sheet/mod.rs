//! Delimited-text decoding for published sheet exports.

mod decode;
mod row;

pub use decode::decode;
pub use row::RawRow;
