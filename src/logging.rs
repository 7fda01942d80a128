/*!
 * Process-wide logger for the `log` facade.
 *
 * Records go to stderr with a local timestamp and a colorized level tag.
 * The host shell calls [`init`] once at startup. If a logger is already
 * installed, by this module or by the host, `init` leaves it and its
 * level alone.
 */

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;

// @struct: Stderr logger
struct StderrLogger;

impl StderrLogger {
    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} [{}] {}\x1B[0m",
                color,
                now,
                tag,
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger at `level`
///
/// Returns `true` when this call installed the logger. When another logger
/// is already set, nothing changes and `false` is returned.
pub fn init(level: LevelFilter) -> bool {
    if log::set_logger(&LOGGER).is_err() {
        return false;
    }
    log::set_max_level(level);
    true
}
