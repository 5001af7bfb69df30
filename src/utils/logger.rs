use console::style;
use std::fmt::Display;

/// Informational logger handed explicitly to each pipeline stage.
///
/// Lines go to stderr as `[LOG][scope] message` and only when enabled, so
/// stdout stays reserved for the exported data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn log(&self, scope: &str, message: impl Display) {
        if self.enabled {
            eprintln!("{}[{}] {}", style("[LOG]").for_stderr().dim(), scope, message);
        }
    }
}
