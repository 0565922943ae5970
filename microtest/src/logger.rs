// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Harness logger: colored, timestamped lines on stderr.
//!
//! Diagnostics go to stderr so the stdout test protocol stays
//! byte-exact.

use core::str::FromStr;

use log::{Level, LevelFilter, Log, Metadata, Record};

macro_rules! color_fmt {
    ($color_code:expr, $($arg:tt)*) => {
        format_args!("\u{1B}[{}m{}\u{1B}[m", $color_code as u8, format_args!($($arg)*))
    };
}

#[repr(u8)]
#[allow(dead_code)]
enum AnsiColor {
    Black         = 30,
    Red           = 31,
    Green         = 32,
    Yellow        = 33,
    Blue          = 34,
    Magenta       = 35,
    Cyan          = 36,
    White         = 37,
    BrightBlack   = 90,
    BrightRed     = 91,
    BrightGreen   = 92,
    BrightYellow  = 93,
    BrightBlue    = 94,
    BrightMagenta = 95,
    BrightCyan    = 96,
    BrightWhite   = 97,
}

struct HarnessLogger;

impl Log for HarnessLogger {
    #[inline]
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level();
        let line = record.line().unwrap_or(0);
        let path = record.target();
        let color = match level {
            Level::Error => AnsiColor::Red,
            Level::Warn => AnsiColor::Yellow,
            Level::Info => AnsiColor::Green,
            Level::Debug => AnsiColor::Cyan,
            Level::Trace => AnsiColor::BrightBlack,
        };

        eprint!(
            "{}",
            color_fmt!(
                AnsiColor::White,
                "[{time} {path}:{line}] {args}\n",
                time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
                path = path,
                line = line,
                args = color_fmt!(color, "{}", record.args()),
            )
        );
    }

    fn flush(&self) {}
}

/// Install the harness logger at the default `Warn` level.
///
/// Later calls are no-ops if a logger is already set.
pub fn init() {
    if log::set_logger(&HarnessLogger).is_ok() {
        log::set_max_level(LevelFilter::Warn);
    }
}

/// Adjust the maximum log level; unknown names turn logging off.
pub fn set_log_level(level: &str) {
    let lf = LevelFilter::from_str(level)
        .ok()
        .unwrap_or(LevelFilter::Off);
    log::set_max_level(lf);
}
