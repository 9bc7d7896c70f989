mod queue;

mod tests;

pub use queue::*;
