//! Console Logger
//!
//! A `tracing-subscriber` fmt layer for the browser. Each event is buffered
//! into one line and handed to the `console` method matching its level, so
//! errors and warnings keep their devtools styling and filtering.
//!
//! Timestamps are disabled: `SystemTime` is unavailable on wasm32 and the
//! console adds its own.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Error returned when a global subscriber is already installed
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the console subscriber as the global default
pub fn init(max_level: Level) -> Result<(), InitError> {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init()
}

/// Console method an event is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
    Log,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            ConsoleMethod::Error
        } else if level == Level::WARN {
            ConsoleMethod::Warn
        } else if level == Level::INFO {
            ConsoleMethod::Info
        } else if level == Level::DEBUG {
            ConsoleMethod::Debug
        } else {
            ConsoleMethod::Log
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::from(*meta.level()))
    }
}

/// Collects one formatted event; emits it when dropped
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self { method, buffer: Vec::with_capacity(128) }
    }

    /// The buffered event without the trailing newline fmt appends
    fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buffer);
        let text = text.trim_end_matches(['\n', '\r']);
        (!text.is_empty()).then(|| text.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            emit(self.method, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => console::error_1(&value),
        ConsoleMethod::Warn => console::warn_1(&value),
        ConsoleMethod::Info => console::info_1(&value),
        ConsoleMethod::Debug => console::debug_1(&value),
        ConsoleMethod::Log => console::log_1(&value),
    }
}

// Native builds (unit tests) have no console object
#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_level_routing() {
        assert_eq!(ConsoleMethod::from(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(Level::TRACE), ConsoleMethod::Log);
    }

    #[test]
    fn test_writer_joins_partial_writes() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Info);
        write!(writer, " INFO [Session] ").unwrap();
        writeln!(writer, "Signed in").unwrap();
        assert_eq!(writer.line().as_deref(), Some(" INFO [Session] Signed in"));
    }

    #[test]
    fn test_empty_writer_emits_nothing() {
        let writer = ConsoleWriter::new(ConsoleMethod::Debug);
        assert_eq!(writer.line(), None);
    }
}
