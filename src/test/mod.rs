
use simplelog::{Config, LevelFilter, TestLogger};

/// Routes the crate's `log` output through the test harness so it shows up for failing tests.
/// Only the first call in a test binary installs the logger.
pub(crate) fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
