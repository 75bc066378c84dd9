pub mod definition;
pub mod file;
pub mod source;

pub use definition::*;
pub use file::*;
pub use source::*;
