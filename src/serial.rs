use std::collections::VecDeque;
use std::io::Write;

use crate::device::SerialLog;

/// Serial lines written straight to a writer (stdout in batch mode).
/// Write failures are dropped, as on a UART with nobody listening.
pub struct WriterSerial<W: Write> {
    out: W,
}

impl<W: Write> WriterSerial<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SerialLog for WriterSerial<W> {
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }
}

/// Keeps the most recent lines, oldest first.
#[derive(Debug, Clone)]
pub struct MemorySerial {
    lines: VecDeque<String>,
    capacity: usize,
}

impl MemorySerial {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for MemorySerial {
    fn default() -> Self {
        Self::new(64)
    }
}

impl SerialLog for MemorySerial {
    fn line(&mut self, text: &str) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(text.to_string());
    }
}
