mod bit_array;

mod tests;

pub use bit_array::*;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
