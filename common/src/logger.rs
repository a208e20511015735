use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format_line(file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("{}", format_uninitialized(file, line, message));
    }
}

fn format_uninitialized(file: &str, line: u32, message: &str) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    format!("Logger not initialized! Call init_logger() first. [{}:{}] {}", file_name, line, message)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories_and_adds_prefix() {
        let logger = Logger::new(Some("Client".to_string()));
        let line = logger.format_line("common/src/games/tictactoe/game_state.rs", 42, "hello");
        assert!(line.ends_with("[Client][game_state.rs:42] hello"));
    }

    #[test]
    fn test_uninitialized_fallback_keeps_message() {
        let line = format_uninitialized("common/src/scores/score_store.rs", 12, "Scores reset");
        assert!(line.starts_with("Logger not initialized!"));
        assert!(line.ends_with("[score_store.rs:12] Scores reset"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None);
        let line = logger.format_line("C:\\src\\main.rs", 7, "started");
        assert!(line.ends_with("[main.rs:7] started"));
        assert!(!line.contains("src"));
    }
}
