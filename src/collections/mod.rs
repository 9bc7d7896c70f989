#[cfg(feature = "bits")]
pub mod bits;
#[cfg(feature = "dict")]
pub mod dict;
#[cfg(feature = "list")]
pub mod list;
#[cfg(feature = "queue")]
pub mod queue;
