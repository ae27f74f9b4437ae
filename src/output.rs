//! Output sinks for the harness.
//!
//! Everything the harness prints (header, per-test lines, footer, log lines)
//! goes through one [`SharedSink`]. The default sink writes to stdout and
//! flushes on every emit so output interleaves correctly with external log
//! collection; tests swap in an [`OutputBuffer`] to capture the run verbatim.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// A writable text sink. `emit` appends raw text with no implied separators;
/// verbosity-1 dot output depends on that.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// StdoutSink: writes to stdout, unbuffered for the duration of the run.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        let mut out = std::io::stdout();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

/// OutputBuffer: collects output into a String for testing or programmatic capture.
#[derive(Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Cloneable handle to the sink shared by the context, the runner, and the
/// log target. Replacing the suite's sink before `run()` redirects all of
/// them at once.
#[derive(Clone)]
pub struct SharedSink(Arc<Mutex<dyn OutputSink + Send>>);

impl SharedSink {
    pub fn new<S: OutputSink + Send + 'static>(sink: S) -> Self {
        SharedSink(Arc::new(Mutex::new(sink)))
    }

    /// The default sink: unbuffered stdout.
    pub fn stdout() -> Self {
        Self::new(StdoutSink)
    }

    /// A capture sink plus a handle for reading back what was written.
    pub fn buffer() -> (Self, BufferHandle) {
        let buf: Arc<Mutex<OutputBuffer>> = Arc::new(Mutex::new(OutputBuffer::new()));
        let sink = SharedSink(buf.clone() as Arc<Mutex<dyn OutputSink + Send>>);
        (sink, BufferHandle(buf))
    }

    pub fn emit(&self, text: &str) {
        if let Ok(mut sink) = self.0.lock() {
            sink.emit(text);
        }
    }
}

impl Default for SharedSink {
    fn default() -> Self {
        Self::stdout()
    }
}

/// Read-back handle paired with a capture sink from [`SharedSink::buffer`].
#[derive(Clone)]
pub struct BufferHandle(Arc<Mutex<OutputBuffer>>);

impl BufferHandle {
    pub fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buf| buf.as_str().to_owned())
            .unwrap_or_default()
    }
}
