//! Dotenv document type.
//!
//! An ordered list of `KEY=value` pairs with the quoting rules of `.env` files.

#[cfg(unix)]
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// A parsed or to-be-written `.env` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotEnv {
    entries: Vec<(String, String)>,
}

impl DotEnv {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `.env` text.
    ///
    /// Blank lines, comments and lines without `=` are skipped. Keys may carry
    /// an `export ` prefix. Double-quoted values understand `\n`, `\r`, `\"`
    /// and `\\`; single-quoted values are taken verbatim.
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| {
                let key = key.trim();
                let key = key.strip_prefix("export ").unwrap_or(key).trim();
                (key.to_string(), unquote(value.trim()))
            })
            .collect();
        Self { entries }
    }

    /// Read and parse a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Write the document, readable by the owner only on Unix.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_string();

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(path, content)?;
        }

        Ok(())
    }

    /// Append an entry, replacing an existing one with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for DotEnv {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (k, v) in iter {
            env.insert(k, v);
        }
        env
    }
}

impl std::fmt::Display for DotEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in &self.entries {
            if needs_quotes(value) {
                writeln!(f, "{}=\"{}\"", key, escape(value))?;
            } else {
                writeln!(f, "{}={}", key, value)?;
            }
        }
        Ok(())
    }
}

fn unquote(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape(&raw[1..raw.len() - 1]);
    }
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }
    raw.to_string()
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|ch| ch.is_whitespace() || matches!(ch, '#' | '=' | '"' | '\'' | '\\'))
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
