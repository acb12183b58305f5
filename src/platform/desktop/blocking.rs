use std::time::Instant;

use dioxus::logger::tracing::debug;

/// Runs synchronous work such as file parsing inline on the UI
/// thread and records how long it took.
pub fn run_blocking<F, T>(label: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let result = f();
    debug!(task = label, elapsed_ms = started.elapsed().as_millis() as u64, "blocking task finished");
    result
}
