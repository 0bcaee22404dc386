//! Output sink and printer configuration.
//!
//! The render engine writes through the [`Sink`] trait so callers can collect
//! text wherever they like. [`Printer`] is the `String`-backed sink used by
//! [`crate::node_string`] and [`crate::Document::render`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Printer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Print the conjuncts of a vertex instead of its evaluated value.
    pub raw: bool,
}

impl Config {
    /// A configuration with raw mode enabled.
    pub fn raw() -> Self {
        Self { raw: true }
    }
}

/// An append-only text sink.
pub trait Sink {
    /// Append `s` to the output.
    fn write_str(&mut self, s: &str);

    /// The configuration the renderer should honor.
    fn config(&self) -> &Config;

    /// Append the `Display` form of `value`.
    fn write_display(&mut self, value: &dyn Display) {
        self.write_str(&value.to_string());
    }
}

/// Sink that accumulates output in a `String`.
#[derive(Debug, Default)]
pub struct Printer {
    output: String,
    cfg: Config,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: Config) -> Self {
        Self {
            output: String::new(),
            cfg,
        }
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }
}

impl Sink for Printer {
    fn write_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn config(&self) -> &Config {
        &self.cfg
    }

    fn write_display(&mut self, value: &dyn Display) {
        let _ = fmt::Write::write_fmt(&mut self.output, format_args!("{}", value));
    }
}
