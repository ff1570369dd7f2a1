use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        if let Ok(level) = std::env::var("RUST_LOG") {
            let level = match level.to_lowercase().as_str() {
                "error" => LevelFilter::Error,
                "warn" => LevelFilter::Warn,
                "info" => LevelFilter::Info,
                "debug" => LevelFilter::Debug,
                "trace" => LevelFilter::Trace,
                _ => LevelFilter::Off,
            };
            // Ignore failure: another test may have installed a logger.
            let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
        }
    });
}

struct TestLogger;

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // eprintln keeps this out of the test runner's captured stdout.
            eprintln!(
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: TestLogger = TestLogger;
