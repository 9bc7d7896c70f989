use std::io;

use derive_more::{Display, Error, From};

/// The ways reading a [`Config`](super::Config) can fail.
///
/// Lookups of absent keys through the typed getters are errors because a caller asking for
/// `PORT` as an integer has no useful recovery besides reporting which key or value was bad.
/// Use [`Config::get`](super::Config::get) for optional keys.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    /// The underlying file could not be read or written.
    #[display("Unable to access the config file: {_0}")]
    #[from]
    Io(io::Error),

    #[display("Key {key:?} is not present in the config!")]
    MissingKey { key: String },

    #[display("Value {value:?} for key {key:?} cannot be read as {expected}!")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}
