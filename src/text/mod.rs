mod split;

mod tests;

pub use split::*;
