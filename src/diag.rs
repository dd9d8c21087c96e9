//! Diagnostic output
//!
//! Line-oriented messages about rejected input, contention and lookup
//! failures. Output is globally switched by a single flag and never affects
//! control flow. Messages go to the installed [`Sink`]; without one, and with
//! the `esp32-log` feature enabled, they are printed with `esp-println`.

use core::cell::Cell;
use core::fmt::Arguments;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Function receiving one diagnostic line
pub type Sink = fn(Arguments<'_>);

static ENABLED: AtomicBool = AtomicBool::new(false);
static SINK: Mutex<Cell<Option<Sink>>> = Mutex::new(Cell::new(None));

/// Enable or disable diagnostic output
pub fn debug_enable(enable: bool) {
    ENABLED.store(enable, Ordering::Relaxed);
}

/// Check if diagnostic output is enabled
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Install a sink for diagnostic lines, replacing the default output
pub fn set_sink(sink: Sink) {
    critical_section::with(|cs| SINK.borrow(cs).set(Some(sink)));
}

/// Remove the installed sink and fall back to the default output
pub fn clear_sink() {
    critical_section::with(|cs| SINK.borrow(cs).set(None));
}

/// Emit one diagnostic line if output is enabled
///
/// Prefer the [`diag!`](crate::diag!) macro, which skips formatting work when
/// output is disabled.
pub fn emit(args: Arguments<'_>) {
    if !is_enabled() {
        return;
    }
    let sink = critical_section::with(|cs| SINK.borrow(cs).get());
    match sink {
        Some(sink) => sink(args),
        None => default_sink(args),
    }
}

#[cfg(feature = "esp32-log")]
fn default_sink(args: Arguments<'_>) {
    println!("{}", args);
}

#[cfg(not(feature = "esp32-log"))]
fn default_sink(_args: Arguments<'_>) {}

/// Emit a formatted diagnostic line
#[macro_export]
macro_rules! diag {
    ($($arg:tt)*) => {
        if $crate::diag::is_enabled() {
            $crate::diag::emit(format_args!($($arg)*));
        }
    };
}
