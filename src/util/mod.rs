#[cfg(any(feature = "bits", feature = "list"))]
pub mod error;
#[cfg(feature = "list")]
pub mod option;
pub mod panic;
#[cfg(any(feature = "bits", feature = "list"))]
pub mod result;

#[cfg(all(test, feature = "list"))]
pub mod alloc;
#[cfg(all(test, feature = "dict"))]
pub mod hash;
