//! Shared constants, logging and timing for bulk-ingest.
//!
//! Every crate in the workspace leans on the values defined here: the fixed
//! tuple count that throughput is reported against, the default server port,
//! and the [`Metrics`] helper that wraps the timed insertion phase.
mod metrics;

pub use metrics::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Wall-clock durations reported to the operator.
pub type Seconds = f64;
/// Rows per second, computed against [`NUM_TUPLES`].
pub type Throughput = f64;

// ============================================================================
// LOAD PARAMETERS
// ============================================================================
/// Rows assumed per run. Throughput is always reported against this figure,
/// not the number of rows actually loaded.
pub const NUM_TUPLES: usize = 10_000;
/// Port used when none is given on the command line.
pub const DEFAULT_PORT: u16 = 5432;
/// Batch size sentinel when the positional argument is omitted.
pub const DEFAULT_BATCH: i64 = -1;
/// Directory receiving the per-run debug log.
pub const LOG_DIR: &str = "logs";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all(LOG_DIR)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIR, time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
