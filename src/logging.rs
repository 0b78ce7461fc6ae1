use colog::format::CologStyle;
use colored::Colorize;
use log::{Level, LevelFilter};

pub struct Logger;

impl Logger {
    /// installs the global logger; `RUST_LOG` still wins over `verbosity`
    pub fn init(verbosity: LevelFilter) {
        let mut builder = env_logger::Builder::new();
        builder.format(colog::formatter(LevelTokens));
        builder.filter_level(verbosity);
        builder.parse_default_env();
        builder.init();
    }
}

struct LevelTokens;

impl CologStyle for LevelTokens {
    fn prefix_token(&self, level: &Level) -> String {
        let token = match level {
            Level::Error => "E".red(),
            Level::Warn => "W".yellow(),
            Level::Info => "*".green(),
            Level::Debug => "D".blue(),
            Level::Trace => "T".magenta(),
        };

        format!(
            "{}{}{}",
            "[".bright_black(),
            token.bold(),
            "]".bright_black()
        )
    }
}
