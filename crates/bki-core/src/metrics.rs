use crate::NUM_TUPLES;
use crate::Seconds;
use crate::Throughput;
use std::time::Duration;
use std::time::Instant;

/// Elapsed wall-clock time of one insertion phase.
///
/// Connection setup, DDL and truncation are never inside the measured
/// window; callers start the clock immediately before submitting rows
/// and stop it after the commit returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Metrics {
    elapsed: Duration,
}

impl Metrics {
    pub fn between(start: Instant, end: Instant) -> Self {
        Self::from(end.saturating_duration_since(start))
    }
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
    pub fn seconds(&self) -> Seconds {
        self.elapsed.as_secs_f64()
    }
    /// Rows per second against the fixed [`NUM_TUPLES`] figure.
    pub fn throughput(&self) -> Throughput {
        NUM_TUPLES as Throughput / self.seconds()
    }
    /// Writes the report to stdout and mirrors it into the log.
    pub fn print(&self) {
        println!("Time for data inserts: {}", self.seconds());
        println!("Throughput: {}", self.throughput());
        log::info!("insertion phase finished: {}", self);
    }
}

impl From<Duration> for Metrics {
    fn from(elapsed: Duration) -> Self {
        Self { elapsed }
    }
}

impl std::fmt::Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}s, {:.2} rows/s", self.seconds(), self.throughput())
    }
}

/// Runs `future` and measures it, returning its output with the elapsed time.
pub async fn timed<F, T, E>(future: F) -> Result<(T, Metrics), E>
where
    F: std::future::Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let output = future.await?;
    Ok((output, Metrics::between(start, Instant::now())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throughput_ignores_actual_row_count() {
        let metrics = Metrics::from(Duration::from_secs(4));
        assert_eq!(metrics.seconds(), 4.0);
        assert_eq!(metrics.throughput(), 2_500.0);
    }

    #[test]
    fn fractional_seconds() {
        let metrics = Metrics::from(Duration::from_millis(250));
        assert_eq!(metrics.seconds(), 0.25);
        assert_eq!(metrics.throughput(), 40_000.0);
    }

    #[test]
    fn between_never_goes_negative() {
        let later = Instant::now();
        let earlier = later - Duration::from_millis(10);
        assert_eq!(Metrics::between(later, earlier).elapsed(), Duration::ZERO);
        assert_eq!(
            Metrics::between(earlier, later).elapsed(),
            Duration::from_millis(10)
        );
    }

    #[test]
    fn display_reports_both_figures() {
        let metrics = Metrics::from(Duration::from_secs(2));
        assert_eq!(metrics.to_string(), "2.000000s, 5000.00 rows/s");
    }
}
