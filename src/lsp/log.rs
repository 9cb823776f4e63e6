use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use log::{Level, LevelFilter, Log, Metadata, Record};
use lsp::TraceValue;
use lsp_types as lsp;

use super::framework::Client;
use crate::meta;

/// The trace level negotiated with the client, shared between the message
/// loop (which handles `$/setTrace`) and the logger.
#[derive(Debug)]
pub struct AtomicTraceValue {
    value: AtomicU8,
}

impl AtomicTraceValue {
    pub fn new(initial: TraceValue) -> Self {
        Self {
            value: AtomicU8::new(encode(initial)),
        }
    }

    pub fn load(&self) -> TraceValue {
        match self.value.load(Ordering::SeqCst) {
            0 => TraceValue::Off,
            1 => TraceValue::Messages,
            _ => TraceValue::Verbose,
        }
    }

    pub fn store(&self, value: TraceValue) {
        self.value.store(encode(value), Ordering::SeqCst);
    }
}

fn encode(value: TraceValue) -> u8 {
    match value {
        TraceValue::Off => 0,
        TraceValue::Messages => 1,
        TraceValue::Verbose => 2,
    }
}

impl Default for AtomicTraceValue {
    fn default() -> Self {
        Self::new(TraceValue::Off)
    }
}

/// Forwards log records to the client. Errors, warnings and info go out as
/// `window/logMessage` up to the level given on the command line; debug and
/// trace records go out as `$/logTrace` depending on the trace value.
pub struct Logger {
    client: Client,
    trace: Arc<AtomicTraceValue>,
    level: LevelFilter,
}

impl Logger {
    pub fn init(level: LevelFilter, trace: Arc<AtomicTraceValue>, client: Client) {
        let logger = Self {
            client,
            trace,
            level,
        };

        let log: Box<dyn Log> = Box::new(logger);
        log::set_logger(Box::leak(log)).expect("logger is only installed once");
        log::set_max_level(LevelFilter::Trace);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Other crates only get to report problems.
        if !metadata.target().starts_with(meta::NAME) && metadata.level() > Level::Warn {
            return false;
        }

        match (metadata.level(), self.trace.load()) {
            (Level::Debug, TraceValue::Messages) | (Level::Debug | Level::Trace, TraceValue::Verbose) => true,
            (Level::Debug | Level::Trace, _) => false,
            (level, _) => level <= self.level,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let module = record.module_path().unwrap_or(record.target());
        let module = module
            .strip_prefix(meta::NAME)
            .map(|rest| rest.trim_start_matches("::"))
            .unwrap_or(module);

        let message = if module.is_empty() {
            record.args().to_string()
        } else {
            format!("{module}: {}", record.args())
        };

        let typ = match record.level() {
            Level::Error => lsp::MessageType::ERROR,
            Level::Warn => lsp::MessageType::WARNING,
            Level::Info => lsp::MessageType::INFO,

            Level::Debug | Level::Trace => {
                let verbose = match (self.trace.load(), record.file(), record.line()) {
                    (TraceValue::Verbose, Some(file), Some(line)) => Some(format!("{file}:{line}")),
                    _ => None,
                };

                self.client.clone().log_trace(verbose, message);
                return;
            }
        };

        self.client.clone().log(typ, message);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use lsp_types::TraceValue;

    use super::AtomicTraceValue;

    #[test]
    fn trace_values_round_trip() {
        let trace = AtomicTraceValue::default();
        assert_eq!(TraceValue::Off, trace.load());

        for value in [TraceValue::Verbose, TraceValue::Messages, TraceValue::Off] {
            trace.store(value);
            assert_eq!(value, trace.load());
        }
    }
}
