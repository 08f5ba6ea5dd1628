//! Bin packing of required pieces onto stock bars.

mod ffd;

pub use ffd::pack_pieces;
