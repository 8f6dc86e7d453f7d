//! Wall-clock timing for step phases

/// Milliseconds since an arbitrary origin. `Date.now()` in the browser.
#[cfg(target_arch = "wasm32")]
pub(super) fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Run `phase`, storing its duration in `slot` when perf metrics are on.
pub(super) fn timed<T>(perf_on: bool, slot: &mut f64, phase: impl FnOnce() -> T) -> T {
    if !perf_on {
        return phase();
    }
    let start = now_ms();
    let out = phase();
    *slot = now_ms() - start;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timing_leaves_slot_alone() {
        let mut slot = -1.0;
        assert_eq!(timed(false, &mut slot, || 7), 7);
        assert_eq!(slot, -1.0);
    }

    #[test]
    fn enabled_timing_records_elapsed() {
        let mut slot = -1.0;
        assert_eq!(timed(true, &mut slot, || "done"), "done");
        assert!(slot >= 0.0);
    }
}
