//! The core library for the searchb binary.
//!
//! Define the memory-mapped file view and the exact byte search used by
//! the command-line frontend.

mod error;
mod mapped_file;
mod search;

pub use error::{Error, Result};
pub use mapped_file::MappedFile;
pub use search::find_first;
