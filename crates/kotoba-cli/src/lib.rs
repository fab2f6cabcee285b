//! Command implementations behind `kototool` and `kotodrill`.
//!
//! Each `*_ops` module formats into a `String` (or writes to a generic
//! writer) so the output can be tested without a terminal.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod commands;
pub mod format;

use std::path::Path;

/// Shared start-up for both binaries: tracing and custom configuration.
pub fn init(trace_dir: Option<&Path>, counters: Option<&Path>, settings: Option<&Path>) {
    if let Some(dir) = trace_dir {
        kotoba_engine::trace_init::init_tracing(dir);
    }
    die!(
        kotoba_engine::load_config(counters, settings),
        "Error loading config: {}"
    );
}
