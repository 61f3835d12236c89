use chrono::Local;
use log::{max_level, LevelFilter, Metadata, Record};

pub struct StdLogger;

static LOGGER: StdLogger = StdLogger;

/// Installs the process logger. Safe to call more than once; later calls
/// only adjust the level.
pub fn init(level: LevelFilter) {
  let _ = log::set_logger(&LOGGER);
  log::set_max_level(level);
}

impl log::Log for StdLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let time_str = Local::now().format("%Y-%m-%dT%H:%M:%S");
      println!("{0} {1:<5} {2}: {3}", time_str, record.level(), record.target(), record.args())
    }
  }

  fn flush(&self) {}
}
