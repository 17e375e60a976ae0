#![cfg_attr(not(feature = "std"), no_std)]
//! A flag table for `-flag=value` style command lines.
//!
//! Tokens are parsed once into an [`ArgumentTable`], which is then passed by reference to whatever needs
//! flag lookups. Lookups never fail: absent flags fall back to the caller's default and malformed numbers
//! read as zero.
extern crate alloc;

#[cfg(not(feature = "std"))]
mod std;

#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

use core::fmt;
use std::collections::HashMap;
use std::string::{String, ToString};
use std::vec::Vec;

#[cfg(feature = "debug")]
use log::debug;

#[cfg(not(feature = "debug"))]
macro_rules! debug {
    ($($arg:tt)+) => {};
}

mod config;
mod value;

use crate::value::truthy;
pub use crate::value::ArgValue;

const NEGATION_PREFIX: &str = "no";

#[derive(PartialEq, Debug)]
pub enum Error {
    // path of a config file that does not exist
    ConfigNotFound(String),
    // path and reason for a config file that exists but could not be read
    ConfigUnreadable(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ConfigNotFound(path) => write!(f, "config file '{}' not found", path),
            Error::ConfigUnreadable(path, reason) => write!(f, "config file '{}' could not be read: {}", path, reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Every flag seen on the command line, keyed by its name with the leading dashes stripped.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub struct ArgumentTable {
    // all values per flag, in the order they were given. A flag with no `=value` records ""
    values: HashMap<String, Vec<String>>,
    // flag names in order of first occurrence
    order: Vec<String>,
    positional: Vec<String>,
}

/// Strips up to two leading dashes, so `--name`, `-name` and `name` all address the same flag.
pub(crate) fn canonical(name: &str) -> &str {
    let name = name.strip_prefix('-').unwrap_or(name);
    name.strip_prefix('-').unwrap_or(name)
}

pub(crate) fn negation_of(name: &str) -> String {
    let mut negated = String::with_capacity(NEGATION_PREFIX.len() + name.len());
    negated.push_str(NEGATION_PREFIX);
    negated.push_str(name);
    negated
}

fn split_token(token: &str) -> (&str, &str) {
    match token.find('=') {
        Some(i) => (canonical(&token[..i]), &token[i + 1..]),
        None => (canonical(token), ""),
    }
}

impl ArgumentTable {
    /// Parses `tokens` into a table. When `skip_first` is set the first token (conventionally the program
    /// path) is ignored.
    ///
    /// Parsing never fails. A bare `--` ends flag parsing and everything after it, as well as any token not
    /// starting with `-`, is kept as positional.
    pub fn parse<S: AsRef<str>, T: IntoIterator<Item = S>>(tokens: T, skip_first: bool) -> Self {
        debug!("starting arg parsing");
        let mut table = ArgumentTable::default();
        let mut tokens = tokens.into_iter().skip(if skip_first { 1 } else { 0 });
        while let Some(raw) = tokens.next() {
            let token = raw.as_ref();
            if token == "--" {
                debug!("found --, treating everything after as positional");
                (&mut tokens).for_each(|t| table.positional.push(t.as_ref().to_string()));
            } else if token.len() > 1 && token.starts_with('-') {
                let (name, value) = split_token(token);
                debug!("found flag {} with value {:?}", name, value);
                table.record(name, value);
            } else {
                debug!("found positional arg {}", token);
                table.positional.push(token.to_string());
            }
        }
        debug!("finished parsing, {} flags and {} positional", table.order.len(), table.positional.len());
        table
    }

    /// Parses the arguments of the running process, skipping the program path.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        ArgumentTable::parse(std::env::args(), true)
    }

    pub(crate) fn record(&mut self, name: &str, value: &str) {
        if !self.values.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.values.entry(name.to_string()).or_insert_with(Vec::new).push(value.to_string());
    }

    fn last(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.last()).map(String::as_str)
    }

    /// Reads `name` as a boolean.
    ///
    /// A flag given explicitly always wins over its `-no` form, whatever the order: its last value is false
    /// only when it is exactly `"0"`. Otherwise `-noname` makes it false, except `-noname=0` which makes it
    /// true. With neither present `default` is returned.
    pub fn get_bool_arg(&self, name: &str, default: bool) -> bool {
        let name = canonical(name);
        if let Some(value) = self.last(name) {
            return truthy(value);
        }
        match self.last(&negation_of(name)) {
            Some(value) => value == "0",
            None => default,
        }
    }

    /// Reads the last value given for `name`, converted to the type of `default`.
    ///
    /// `default` is returned only when the flag is absent. A flag that is present but holds no value, or a
    /// value that does not parse, reads as the zero value of the type (or `""` for strings).
    ///
    /// ```
    /// use argtable::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse(vec!["prog", "--threads=4", "-mode=fast", "-port=http"], true);
    /// assert_eq!(4, table.get_arg("-threads", 1));
    /// assert_eq!("fast", table.get_arg("-mode", "slow"));
    /// assert_eq!(0, table.get_arg("-port", 8080));
    /// assert_eq!(8080, table.get_arg("-listen", 8080));
    /// ```
    pub fn get_arg<'a, V: ArgValue<'a>>(&'a self, name: &str, default: V) -> V {
        match self.last(canonical(name)) {
            Some(value) => V::from_arg(value),
            None => default,
        }
    }

    /// Every value given for `name`, in command line order.
    pub fn get_args(&self, name: &str) -> &[String] {
        self.values.get(canonical(name)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `name` itself was given. Its `-no` form does not count.
    pub fn is_arg_set(&self, name: &str) -> bool {
        self.values.contains_key(canonical(name))
    }

    /// Flag names as stored (dashes stripped), in order of first occurrence.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Tokens that were not flags, including everything after a bare `--`.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    // whether the table already holds `name` or its counterpart (`x` for `nox`, `nox` for `x`)
    fn claims(&self, name: &str) -> bool {
        if self.values.contains_key(name) || self.values.contains_key(negation_of(name).as_str()) {
            return true;
        }
        match name.strip_prefix(NEGATION_PREFIX) {
            Some(base) => self.values.contains_key(base),
            None => false,
        }
    }

    /// Sets `name` to `value` unless it was already given, either directly or through its `-no` form.
    /// Returns whether the value was stored.
    pub fn soft_set_arg(&mut self, name: &str, value: &str) -> bool {
        let name = canonical(name);
        if self.claims(name) {
            debug!("{} already given, keeping it", name);
            return false;
        }
        self.record(name, value);
        true
    }

    /// [`ArgumentTable::soft_set_arg`] storing `"1"` or `"0"`.
    pub fn soft_set_bool_arg(&mut self, name: &str, value: bool) -> bool {
        self.soft_set_arg(name, if value { "1" } else { "0" })
    }
}
