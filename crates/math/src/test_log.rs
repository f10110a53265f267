//! A `log` sink for tests that need to observe diagnostics.

use std::sync::{Mutex, Once};

static LOG: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct Log {}

impl log::Log for Log {
	fn enabled(&self, _metadata: &log::Metadata) -> bool {
		true
	}

	fn log(&self, record: &log::Record) {
		let msg = format!("{}: {}", record.level(), record.args());
		LOG.lock().unwrap().push(msg);
	}

	fn flush(&self) {}
}

/// Installs the capturing logger. May be called from every test, only the first call has an effect.
pub fn install() {
	static INSTALL: Once = Once::new();

	INSTALL.call_once(|| {
		log::set_logger(&Log {}).map(|()| log::set_max_level(log::LevelFilter::Trace)).unwrap();
	});
}

/// Returns whether any captured message contains `needle`.
pub fn contains(needle: &str) -> bool {
	LOG.lock().unwrap().iter().any(|msg| msg.contains(needle))
}
