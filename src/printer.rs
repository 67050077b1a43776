//! Bounded-width rendering of `(key, count)` entries.
//!
//! One line per entry: the key as lowercase hex bytes separated by spaces, a
//! tab, then the count. Keys longer than the width cap show only their first
//! `width_cap` bytes followed by [`TRUNCATION_MARKER`] and the number of
//! hidden bytes, e.g. `00 01 ... 1f ...(+8)`. The empty key renders as
//! `<empty>`.

use std::io;

use crate::config::PrinterConfig;
use crate::error::Result;
use crate::key::ByteKey;

/// Default number of key bytes rendered per line.
pub const DEFAULT_WIDTH_CAP: usize = 32;

/// Appended to keys cut at the width cap.
pub const TRUNCATION_MARKER: &str = " ...";

/// Formats trie entries for diagnostic output.
#[derive(Debug, Clone)]
pub struct EntryPrinter {
    width_cap: usize,
}

impl EntryPrinter {
    pub fn new(config: PrinterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            width_cap: config.width_cap,
        })
    }

    pub fn width_cap(&self) -> usize {
        self.width_cap
    }

    pub fn format_key(&self, key: &[u8]) -> String {
        if key.is_empty() {
            return "<empty>".to_string();
        }

        let shown = key.len().min(self.width_cap);
        let mut out = String::with_capacity(shown * 3 + 16);
        for (i, byte) in key[..shown].iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{byte:02x}"));
        }
        if key.len() > shown {
            out.push_str(&format!("{TRUNCATION_MARKER}(+{})", key.len() - shown));
        }
        out
    }

    pub fn format_entry(&self, key: &[u8], count: u64) -> String {
        format!("{}\t{}", self.format_key(key), count)
    }

    /// Write one line per entry to `out`; returns the number of lines.
    pub fn write_entries<'k, W, I>(&self, mut out: W, entries: I) -> io::Result<usize>
    where
        W: io::Write,
        I: IntoIterator<Item = (ByteKey<'k>, u64)>,
    {
        let mut lines = 0;
        for (key, count) in entries {
            writeln!(out, "{}", self.format_entry(&key, count))?;
            lines += 1;
        }
        out.flush()?;
        Ok(lines)
    }
}

impl Default for EntryPrinter {
    fn default() -> Self {
        Self {
            width_cap: DEFAULT_WIDTH_CAP,
        }
    }
}
