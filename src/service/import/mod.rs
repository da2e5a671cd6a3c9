mod process_file;
mod row;

pub use process_file::*;
pub use row::*;
