mod dict;
mod iter;


pub use dict::*;
pub use iter::*;
