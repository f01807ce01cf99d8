/// Runs `f`, logging how long it took when the `metrics` feature is enabled.
#[cfg(feature = "metrics")]
pub fn measure<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let started_at = std::time::Instant::now();
    let result = f();

    log::debug!(
        "{label}: {}",
        humantime::format_duration(started_at.elapsed())
    );

    result
}

#[cfg(not(feature = "metrics"))]
pub fn measure<T>(_: &str, f: impl FnOnce() -> T) -> T {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_result() {
        assert_eq!(42, measure("answer", || 40 + 2));
    }
}
