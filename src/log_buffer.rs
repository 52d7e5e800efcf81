//! Levelled event log for widget activity.
//!
//! The object tree keeps a circular buffer of recent events (creation,
//! deletion, clamped writes, rejected calls) so an application can show them
//! on a debug page. On ARM targets every entry is also forwarded to `defmt`.
//!
//! # Log Levels
//!
//! - `Trace`: Dark gray - per-frame refresh activity
//! - `Debug`: Gray - configuration changes
//! - `Info`: Green - object lifecycle
//! - `Warn`: Yellow - silently corrected input
//! - `Error`: Red - rejected calls
//!
//! # Usage
//!
//! ```ignore
//! use crate::log_buffer::{log_info, log_warn};
//!
//! log_info!(self.log, "gauge #{} created", index);
//! log_warn!(self.log, "value {} clamped to {}", value, clamped);
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{GRAY, GREEN, RED, SLATE, YELLOW};
use crate::config::{LOG_ENTRIES, LOG_MSG_LEN};

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Per-frame activity (dark slate)
    Trace = 0,
    /// Configuration changes (gray)
    Debug = 1,
    /// Object lifecycle (green)
    #[default]
    Info = 2,
    /// Corrected input (yellow)
    Warn = 3,
    /// Rejected calls (red)
    Error = 4,
}

impl LogLevel {
    /// Get the display color for this log level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace => SLATE,
            Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and sequence number.
#[derive(Clone, Debug)]
pub struct LogEntry {
    /// Log severity level.
    pub level: LogLevel,
    /// Log message (truncated to `LOG_MSG_LEN - 1` characters).
    pub message: String<LOG_MSG_LEN>,
    /// Position of this entry in the stream of all entries ever pushed.
    pub seq: u32,
}

impl LogEntry {
    /// Create a new log entry.
    pub fn new(
        level: LogLevel,
        message: &str,
        seq: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for (i, c) in message.chars().enumerate() {
            if i >= LOG_MSG_LEN - 1 {
                break;
            }
            msg.push(c).ok();
        }
        Self { level, message: msg, seq }
    }
}

/// Circular buffer of log entries.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
    next_seq: u32,
}

impl LogBuffer {
    /// Create a new empty log buffer.
    pub const fn new() -> Self {
        Self {
            entries: [const {
                LogEntry {
                    level: LogLevel::Info,
                    message: String::new(),
                    seq: 0,
                }
            }; LOG_ENTRIES],
            head: 0,
            count: 0,
            next_seq: 0,
        }
    }

    /// Record a message. Oldest entry is dropped if the buffer is full.
    pub fn push(
        &mut self,
        level: LogLevel,
        message: &str,
    ) {
        self.entries[self.head] = LogEntry::new(level, message, self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    /// Get the number of entries in the buffer.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Drop every entry. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }

    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&LogEntry> {
        if self.count == 0 {
            return None;
        }
        Some(&self.entries[(self.head + LOG_ENTRIES - 1) % LOG_ENTRIES])
    }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }
}

// =============================================================================
// Logging Macros
// =============================================================================

/// Format into a bounded string and push at the given level.
macro_rules! log_at {
    ($buf:expr, $level:expr, $($arg:tt)*) => {{
        use core::fmt::Write as _;
        let mut msg: heapless::String<{ $crate::config::LOG_MSG_LEN }> = heapless::String::new();
        let _ = write!(msg, $($arg)*);
        $buf.push($level, msg.as_str());
    }};
}

/// Log a message at Trace level.
macro_rules! log_trace {
    ($buf:expr, $($arg:tt)*) => {{
        $crate::log_buffer::log_at!($buf, $crate::log_buffer::LogLevel::Trace, $($arg)*);
        #[cfg(target_arch = "arm")]
        defmt::trace!($($arg)*);
    }};
}

/// Log a message at Debug level.
macro_rules! log_debug {
    ($buf:expr, $($arg:tt)*) => {{
        $crate::log_buffer::log_at!($buf, $crate::log_buffer::LogLevel::Debug, $($arg)*);
        #[cfg(target_arch = "arm")]
        defmt::debug!($($arg)*);
    }};
}

/// Log a message at Info level.
macro_rules! log_info {
    ($buf:expr, $($arg:tt)*) => {{
        $crate::log_buffer::log_at!($buf, $crate::log_buffer::LogLevel::Info, $($arg)*);
        #[cfg(target_arch = "arm")]
        defmt::info!($($arg)*);
    }};
}

/// Log a message at Warn level.
macro_rules! log_warn {
    ($buf:expr, $($arg:tt)*) => {{
        $crate::log_buffer::log_at!($buf, $crate::log_buffer::LogLevel::Warn, $($arg)*);
        #[cfg(target_arch = "arm")]
        defmt::warn!($($arg)*);
    }};
}

/// Log a message at Error level.
macro_rules! log_error {
    ($buf:expr, $($arg:tt)*) => {{
        $crate::log_buffer::log_at!($buf, $crate::log_buffer::LogLevel::Error, $($arg)*);
        #[cfg(target_arch = "arm")]
        defmt::error!($($arg)*);
    }};
}

pub(crate) use {log_at, log_debug, log_error, log_info, log_trace, log_warn};

// =============================================================================
// Tests
// =============================================================================
