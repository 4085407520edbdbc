//! Color scheme parsing and ANSI wrapping.
//!
//! A scheme is a flat string of `tag=code` pairs separated by newlines or
//! colons, e.g. `list=38;5;37:number=1`. Codes are SGR parameters and are
//! emitted verbatim as `ESC[<code>m`.

use std::cell::OnceCell;
use std::collections::HashMap;

/// Attribute code used for tags missing from the scheme.
pub const DEFAULT_CODE: &str = "0";

pub const DEFAULT_COLORS: &str = "
    list=38;5;37
    list2=38;5;77
    list3=38;5;227
    list4=38;5;209
    number=38;5;210
    error=38;5;196";

const RESET: &str = "\x1b[0m";

pub struct ColorScheme {
    raw: String,
    parsed: OnceCell<HashMap<String, String>>,
    enabled: bool,
}

impl ColorScheme {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into(), parsed: OnceCell::new(), enabled: true }
    }

    /// Toggle escape output. A disabled scheme returns text untouched.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Parse a raw scheme string. Never fails; fragments without `=` are
    /// dropped and a repeated tag keeps its last value.
    pub fn parse(raw: &str) -> HashMap<String, String> {
        raw.split(['\n', ':'])
            .filter_map(|entry| entry.split_once('='))
            .map(|(key, value)| {
                (key.trim().to_string(), value.trim().to_string())
            })
            .collect()
    }

    fn mapping(&self) -> &HashMap<String, String> {
        self.parsed.get_or_init(|| Self::parse(&self.raw))
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed.get().is_some()
    }

    pub fn code(&self, tag: &str) -> &str {
        self.mapping().get(tag).map(String::as_str).unwrap_or(DEFAULT_CODE)
    }

    pub fn colorize(&self, tag: &str, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[{}m{}{}", self.code(tag), text, RESET)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS)
    }
}
