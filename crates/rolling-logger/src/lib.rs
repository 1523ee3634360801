//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes every formatted line to the
//! browser console (stderr off-wasm) and keeps the most recent lines in a
//! bounded in-memory buffer.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Lines kept by the global buffer
pub const DEFAULT_CAPACITY: usize = 200;

static BUFFER: OnceLock<LogBuffer> = OnceLock::new();

/// Circular buffer of formatted log lines
#[derive(Clone, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Append a line, evicting the oldest when full
    pub fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn emit(line: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&line.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", line);
}

/// Per-event writer: collects one formatted event, flushes it on drop
pub struct LineWriter {
    buffer: LogBuffer,
    pending: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.pending);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        emit(line);
        self.buffer.push(line.to_string());
    }
}

/// `MakeWriter` that tees into a `LogBuffer`
#[derive(Clone)]
pub struct RollingWriter {
    buffer: LogBuffer,
}

impl RollingWriter {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            buffer: self.buffer.clone(),
            pending: Vec::new(),
        }
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(max_level: Level) {
    let buffer = BUFFER.get_or_init(|| LogBuffer::new(DEFAULT_CAPACITY)).clone();
    let result = tracing_subscriber::fmt()
        .with_writer(RollingWriter::new(buffer))
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();
    if result.is_err() {
        tracing::debug!("Logger already installed");
    }
}

/// Lines captured since `init`, oldest first
pub fn recent_lines() -> Vec<String> {
    BUFFER.get().map(LogBuffer::snapshot).unwrap_or_default()
}
