//! Tracing and panic output for hosts embedding tab rows.

use std::backtrace::Backtrace;
use std::io::{self, Write};
use std::panic::{self, PanicHookInfo};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Once;
use std::thread;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::dynamic_filter_fn;
use tracing_subscriber::fmt::{self, writer::MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};

const TRACING_PREFIX: &str = "[tablayout] ";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;
const MAX_PANIC_LINES: usize = 8;

static PANIC_HOOK_INSTALLED: Once = Once::new();
static TRACING_INSTALLED: Once = Once::new();
static LOG_LEVEL: AtomicU8 = AtomicU8::new(level_to_u8(DEFAULT_LOG_LEVEL));

const fn level_to_u8(level: LevelFilter) -> u8 {
    match level {
        LevelFilter::OFF => 0,
        LevelFilter::ERROR => 1,
        LevelFilter::WARN => 2,
        LevelFilter::INFO => 3,
        LevelFilter::DEBUG => 4,
        _ => 5,
    }
}

const fn level_from_u8(value: u8) -> LevelFilter {
    match value {
        0 => LevelFilter::OFF,
        1 => LevelFilter::ERROR,
        2 => LevelFilter::WARN,
        3 => LevelFilter::INFO,
        4 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Current runtime log level.
#[must_use]
pub fn log_level() -> LevelFilter {
    level_from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Changes the runtime log level, e.g. `"debug"`.
///
/// Unknown names fall back to `info`. `RUST_LOG` still applies on top.
pub fn set_log_level(level: &str) {
    let parsed = LevelFilter::from_str(level).unwrap_or(DEFAULT_LOG_LEVEL);
    LOG_LEVEL.store(level_to_u8(parsed), Ordering::Relaxed);
}

/// Installs the global tracing subscriber (idempotent).
///
/// Events go to stderr with a `[tablayout]` prefix, filtered by `RUST_LOG`
/// (default `info`) and by [`set_log_level`]. On Android they also go to
/// logcat.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let runtime = dynamic_filter_fn(|metadata, _| *metadata.level() <= log_level());

        let console = fmt::layer()
            .with_writer(PrefixedWriter)
            .with_ansi(false)
            .with_filter(runtime);

        #[cfg(target_os = "android")]
        let result = {
            let registry = tracing_subscriber::registry().with(env).with(console);
            if let Ok(android) = tracing_android::layer("tablayout") {
                registry.with(android).try_init()
            } else {
                registry.try_init()
            }
        };

        #[cfg(not(target_os = "android"))]
        let result = tracing_subscriber::registry()
            .with(env)
            .with(console)
            .try_init();

        if result.is_err() {
            eprintln!("{TRACING_PREFIX}a global tracing subscriber was already set");
        }
    });
}

/// Routes panics through `tracing::error!` before the previous hook runs
/// (idempotent).
pub fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            report_panic(info);
            previous(info);
        }));
    });
}

fn report_panic(info: &PanicHookInfo<'_>) {
    let message = panic_message(info);
    let location = info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
        .unwrap_or_default();
    let thread = thread::current().name().unwrap_or("unnamed").to_owned();
    let backtrace = truncate_lines(&Backtrace::capture().to_string(), MAX_PANIC_LINES);

    tracing::error!(
        target: "tablayout::panic",
        %message,
        %location,
        %thread,
        %backtrace,
        "panic"
    );
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_owned()
    }
}

fn truncate_lines(text: &str, max: usize) -> String {
    let mut out: Vec<&str> = text.lines().take(max).collect();
    if text.lines().count() > max {
        out.push("... (truncated)");
    }
    out.join("\n")
}

#[derive(Debug, Clone, Copy, Default)]
struct PrefixedWriter;

impl<'a> MakeWriter<'a> for PrefixedWriter {
    type Writer = PrefixedWriterInner<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        PrefixedWriterInner {
            inner: io::stderr(),
            wrote_prefix: false,
        }
    }
}

#[derive(Debug)]
struct PrefixedWriterInner<W> {
    inner: W,
    wrote_prefix: bool,
}

impl<W: Write> Write for PrefixedWriterInner<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.wrote_prefix {
            self.inner.write_all(TRACING_PREFIX.as_bytes())?;
            self.wrote_prefix = true;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
