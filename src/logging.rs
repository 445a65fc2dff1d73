use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SPLITPANE_LOG";
const DEFAULT_FILTER: &str = "splitpane=info";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
    log_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Formatted log lines, for display inside the UI.
    pub fn take_log_rx(&mut self) -> Option<Receiver<String>> {
        self.log_rx.take()
    }
}

/// Buffers one event's output and forwards it line by line when dropped.
struct LineForwarder {
    buf: Vec<u8>,
    tx: Sender<String>,
}

impl Write for LineForwarder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineForwarder {
    fn drop(&mut self) {
        for line in String::from_utf8_lossy(&self.buf).lines() {
            let _ = self.tx.send(line.to_string());
        }
    }
}

#[derive(Clone)]
struct TeeMakeWriter {
    file: NonBlocking,
    tx: Sender<String>,
}

struct TeeWriter {
    file: NonBlocking,
    ui: LineForwarder,
}

impl<'a> MakeWriter<'a> for TeeMakeWriter {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter {
            file: self.file.make_writer(),
            ui: LineForwarder {
                buf: Vec::with_capacity(128),
                tx: self.tx.clone(),
            },
        }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        let _ = self.ui.write_all(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to a daily file under the cache dir (temp dir as fallback). `None` if no directory is
/// writable or a subscriber is already installed.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = splitpane::settings::ensure_log_dir()
        .or_else(|_| -> io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("splitpane").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "splitpane.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let (log_tx, log_rx) = mpsc::channel::<String>();
    let writer = TeeMakeWriter {
        file: non_blocking,
        tx: log_tx,
    };

    let subscriber = tracing_subscriber::registry().with(env_filter()).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
        log_rx: Some(log_rx),
    })
}
