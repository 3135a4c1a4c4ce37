//! Tracing setup for the widget host. Library code only emits `tracing`
//! events; the binary installs the subscriber once at startup. In the browser
//! the formatted lines go to the developer console.

use super::errors::AppError;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Maps a configured verbosity (`error`..`trace` or `0`..`4`) to a level.
/// Unknown values fall back to `WARN`.
pub fn verbosity_level(level: &str) -> tracing::Level {
    let numeric = level.trim().parse::<u8>().ok();
    match (numeric, level.trim().to_lowercase().as_str()) {
        (Some(0), _) | (_, "error") => tracing::Level::ERROR,
        (Some(2), _) | (_, "info") => tracing::Level::INFO,
        (Some(3), _) | (_, "debug") => tracing::Level::DEBUG,
        (Some(4..), _) | (_, "trace") => tracing::Level::TRACE,
        _ => tracing::Level::WARN,
    }
}

/// Installs the global subscriber.
///
/// # Errors
/// Returns `AppError::Telemetry` if a global subscriber is already set.
pub fn init(level: &str) -> Result<(), AppError> {
    let fmt_layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(writer::ConsoleMakeWriter);

    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity_level(level).into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|error| AppError::Telemetry(error.to_string()))
}

#[cfg(target_arch = "wasm32")]
mod writer {
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;

    /// Buffers one formatted event and hands it to `console.log` on drop.
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buffer.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&line.trim_end().into());
            self.buffer.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buffer: Vec::new() }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod writer {
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = io::Stderr;

        fn make_writer(&'a self) -> Self::Writer {
            io::stderr()
        }
    }
}
