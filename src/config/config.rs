use std::fmt::{self, Debug, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::ConfigError;
use crate::collections::dict::Dictionary;
use crate::collections::list::List;
use crate::text;

/// A `KEY=VALUE` configuration file loaded into a [`Dictionary`], with typed getters for the
/// value formats assignments use: strings, integers, floats and bracketed arrays.
///
/// One property per line; the first `=` separates key from value, so values may themselves
/// contain `=`. Blank lines are skipped. Keys and values are trimmed of surrounding whitespace,
/// which also makes trailing carriage returns and stray newlines harmless.
pub struct Config {
    path: PathBuf,
    properties: Dictionary<String, String>,
}

impl Config {
    /// Reads the file at `path` and parses every `KEY=VALUE` line into a property. Lines without
    /// an `=` are ignored.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path)?;

        let mut properties = Dictionary::new();
        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            properties.insert(key.to_string(), value.trim().to_string());
        }

        Ok(Config {
            path,
            properties,
        })
    }

    /// Creates an empty Config that [`save`](Config::save) will write to `path`.
    pub fn empty(path: impl AsRef<Path>) -> Config {
        Config {
            path: path.as_ref().to_path_buf(),
            properties: Dictionary::new(),
        }
    }

    /// The file this Config was loaded from and saves back to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns the raw value for `key`, or [`None`] if the key is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or [`ConfigError::MissingKey`] if it is absent.
    pub fn get_string(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key).ok_or_else(|| ConfigError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Returns the value for `key` parsed as an `i32`.
    pub fn get_i32(&self, key: &str) -> Result<i32, ConfigError> {
        self.parse(key, "an integer")
    }

    /// Returns the value for `key` parsed as an `i64`.
    pub fn get_i64(&self, key: &str) -> Result<i64, ConfigError> {
        self.parse(key, "an integer")
    }

    /// Returns the value for `key` parsed as an `f64`.
    pub fn get_f64(&self, key: &str) -> Result<f64, ConfigError> {
        self.parse(key, "a number")
    }

    /// Returns the value for `key` read as a bracketed array, e.g. `[1, 2, 3]`.
    pub fn get_array(&self, key: &str) -> Result<List<String>, ConfigError> {
        let raw = self.get_string(key)?;
        text::parse_array(raw).ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            expected: "an array",
        })
    }

    /// Sets `key` to `value`, creating the property if absent and returning the previous value
    /// otherwise. Changes stay in memory until [`save`](Config::save).
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        self.properties.insert(key.to_string(), value.into())
    }

    /// Sets `key` to the bracketed rendering of `values`.
    pub fn set_array<I>(&mut self, key: &str, values: I) -> Option<String>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.set(key, text::render_array(values))
    }

    /// Removes the property for `key`, returning its value if it was present.
    pub fn remove_key(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// Writes the properties back to the file this Config was loaded from.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_as(&self.path)
    }

    /// Writes the properties to `path`, one `KEY=VALUE` line each, in arbitrary order.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let mut rendered = String::new();
        for (key, value) in self.properties.iter() {
            rendered.push_str(key);
            rendered.push('=');
            rendered.push_str(value);
            rendered.push('\n');
        }

        fs::write(path, rendered)?;
        Ok(())
    }

    fn parse<N: FromStr>(&self, key: &str, expected: &'static str) -> Result<N, ConfigError> {
        let raw = self.get_string(key)?;
        raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            expected,
        })
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("path", &self.path)
            .field("properties", &self.properties)
            .finish()
    }
}
