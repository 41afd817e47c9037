//! Human-readable narration of a run.
use std::fmt::Display;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Line-oriented sink for narration. Write failures are logged, never fatal.
pub struct Console {
    sink: Box<dyn Write + Send>,
    quiet: bool,
}

impl Console {
    #[must_use]
    pub fn stdout(quiet: bool) -> Self {
        Self {
            sink: Box::new(std::io::stdout()),
            quiet,
        }
    }

    /// Console whose output is kept in memory and readable through the returned
    /// [`Transcript`].
    #[must_use]
    pub fn capture() -> (Self, Transcript) {
        let transcript = Transcript::default();
        let console = Self {
            sink: Box::new(transcript.clone()),
            quiet: false,
        };
        (console, transcript)
    }

    /// Narration line, dropped in quiet mode.
    pub fn say(&mut self, line: impl Display) {
        if self.quiet {
            return;
        }
        self.write_line(&line);
    }

    /// Usage and dispatch errors; printed even in quiet mode.
    pub fn notice(&mut self, line: impl Display) {
        self.write_line(&line);
    }

    fn write_line(&mut self, line: &dyn Display) {
        if let Err(err) = writeln!(self.sink, "{}", line) {
            tracing::warn!("Failed to write console line: {}", err);
            return;
        }
        if let Err(err) = self.sink.flush() {
            tracing::warn!("Failed to flush console: {}", err);
        }
    }
}

/// Shared in-memory buffer behind [`Console::capture`].
#[derive(Clone, Default)]
pub struct Transcript {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Transcript {
    #[must_use]
    pub fn text(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
