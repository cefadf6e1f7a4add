pub mod array;
pub mod c_source;

pub use array::{ArrayFormatter, BinaryFormatter, TextFormatter, BYTES_PER_ROW};
pub use c_source::CSourceFormatter;
