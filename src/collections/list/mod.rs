mod cursor;
mod iter;
mod list;
mod node;
mod slot;


pub use cursor::*;
pub use iter::*;
pub use list::*;
pub(crate) use node::*;
pub(crate) use slot::*;
